pub mod activity;

pub use activity::{Activity, ActivityDirectory};
