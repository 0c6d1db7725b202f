//! Static course and demo-class catalog shown on the marketing pages.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub slug: &'static str,
    pub title: &'static str,
    pub level: Level,
    pub weeks: u8,
    pub summary: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoClass {
    pub course: &'static str,
    pub title: &'static str,
    pub schedule: &'static str,
    pub minutes: u16,
}

pub const COURSES: &[Course] = &[
    Course {
        slug: "web-foundations",
        title: "Web Development Foundations",
        level: Level::Beginner,
        weeks: 8,
        summary: "HTML, CSS and JavaScript from first principles to a deployed portfolio site.",
    },
    Course {
        slug: "data-analysis",
        title: "Data Analysis with Python",
        level: Level::Beginner,
        weeks: 10,
        summary: "Clean, explore and visualize real datasets with pandas and notebooks.",
    },
    Course {
        slug: "full-stack",
        title: "Full-Stack Application Engineering",
        level: Level::Intermediate,
        weeks: 12,
        summary: "Design APIs, model databases and ship an authenticated web application.",
    },
    Course {
        slug: "machine-learning",
        title: "Applied Machine Learning",
        level: Level::Intermediate,
        weeks: 12,
        summary: "Train, evaluate and deploy models for classification and forecasting.",
    },
    Course {
        slug: "cloud-devops",
        title: "Cloud and DevOps Practice",
        level: Level::Advanced,
        weeks: 10,
        summary: "Containers, CI pipelines, infrastructure as code and production monitoring.",
    },
    Course {
        slug: "systems-design",
        title: "Systems Design Interview Prep",
        level: Level::Advanced,
        weeks: 6,
        summary: "Reason about scale, storage and trade-offs through guided case studies.",
    },
];

pub const DEMO_CLASSES: &[DemoClass] = &[
    DemoClass {
        course: "web-foundations",
        title: "Build your first responsive page",
        schedule: "Saturdays, 10:00",
        minutes: 60,
    },
    DemoClass {
        course: "data-analysis",
        title: "From spreadsheet to insight",
        schedule: "Wednesdays, 18:30",
        minutes: 45,
    },
    DemoClass {
        course: "full-stack",
        title: "Anatomy of a login flow",
        schedule: "Thursdays, 19:00",
        minutes: 60,
    },
    DemoClass {
        course: "machine-learning",
        title: "Your first prediction model",
        schedule: "Sundays, 11:00",
        minutes: 75,
    },
];

/// Courses highlighted on the home page.
pub fn featured_courses() -> &'static [Course] {
    &COURSES[..3]
}

pub fn course_by_slug(slug: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.slug == slug)
}
