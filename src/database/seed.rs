use crate::models::{Activity, ActivityDirectory};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: [&'static str; 2],
}

const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: ["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: ["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: ["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Team training, drills, and competitive matches",
        schedule: "Mondays and Wednesdays, 4:00 PM - 6:00 PM",
        max_participants: 22,
        participants: ["alex@mergington.edu", "maria@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "League play and skill development for basketball players",
        schedule: "Tuesdays and Thursdays, 5:00 PM - 7:00 PM",
        max_participants: 12,
        participants: ["linda@mergington.edu", "kevin@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore drawing, painting, and mixed media projects",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: ["maya@mergington.edu", "chloe@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Acting, stagecraft, and production rehearsals",
        schedule: "Thursdays, 4:00 PM - 6:30 PM",
        max_participants: 25,
        participants: ["leo@mergington.edu", "isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Practice argumentation, public speaking, and competitive debates",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 16,
        participants: ["nina@mergington.edu", "ethan@mergington.edu"],
    },
    SeedActivity {
        name: "Science Club",
        description: "Hands-on experiments, science projects, and guest lectures",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 20,
        participants: ["oscar@mergington.edu", "zoe@mergington.edu"],
    },
];

/// Fresh copy of the startup directory.
pub fn seed_directory() -> ActivityDirectory {
    SEED_ACTIVITIES
        .iter()
        .map(|seed| {
            (
                seed.name.to_string(),
                Activity::new(
                    seed.description,
                    seed.schedule,
                    seed.max_participants,
                    &seed.participants,
                ),
            )
        })
        .collect()
}
