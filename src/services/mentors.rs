// src/services/mentors.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub day: &'static str,
    pub time: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mentor {
    pub id: &'static str,
    pub name: &'static str,
    pub subject: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub sessions: &'static [Session],
}

const fn session(day: &'static str, time: &'static str, price: u32) -> Session {
    Session { day, time, price }
}

static MENTORS: &[Mentor] = &[
    Mentor {
        id: "m1",
        name: "Bishwash",
        subject: "Mathematics",
        description: "Expert in problem-solving, calculus, and logical reasoning. Loves helping students simplify complex concepts.",
        contact: "7033771446",
        sessions: &[
            session("Monday", "10:00 AM - 11:00 AM", 100),
            session("Thursday", "3:00 PM - 4:00 PM", 100),
            session("Saturday", "5:00 PM - 6:00 PM", 100),
        ],
    },
    Mentor {
        id: "m2",
        name: "Abhishek",
        subject: "Physics",
        description: "Passionate about mechanics and electricity. Breaks down difficult topics into easy-to-understand lessons.",
        contact: "7848021451",
        sessions: &[
            session("Tuesday", "9:00 AM - 10:00 AM", 150),
            session("Friday", "2:00 PM - 3:00 PM", 180),
        ],
    },
    Mentor {
        id: "m3",
        name: "Akib",
        subject: "Computer Science",
        description: "Specialist in algorithms, Python, and problem-solving. Makes programming fun and practical.",
        contact: "6202160937",
        sessions: &[
            session("Wednesday", "1:00 PM - 2:00 PM", 200),
            session("Saturday", "10:00 AM - 11:00 AM", 180),
        ],
    },
    Mentor {
        id: "m4",
        name: "Sabteen",
        subject: "Chemistry",
        description: "Experienced in organic and inorganic chemistry, focuses on real-world applications and conceptual clarity.",
        contact: "9798177611",
        sessions: &[
            session("Monday", "4:00 PM - 5:00 PM", 160),
            session("Thursday", "11:00 AM - 12:00 PM", 190),
        ],
    },
];

/// The full catalog in display order. Never changes while the process runs.
pub fn list_mentors() -> &'static [Mentor] {
    MENTORS
}
