use crate::types::Difficulty;

/// One row of the milestone checklist generated at path creation.
/// `{topic}` in the description is replaced with the path title.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub hours: f64,
}

const BEGINNER: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        title: "Introduction & Setup",
        description: "Get familiar with {topic} basics and set up your learning environment",
        hours: 5.0,
    },
    MilestoneTemplate {
        title: "Core Concepts - Part 1",
        description: "Learn the fundamental building blocks of {topic}",
        hours: 8.0,
    },
    MilestoneTemplate {
        title: "Core Concepts - Part 2",
        description: "Deepen your understanding of essential {topic} principles",
        hours: 8.0,
    },
    MilestoneTemplate {
        title: "Hands-On Practice",
        description: "Apply what you've learned through guided exercises",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "First Mini Project",
        description: "Build your first small project to reinforce concepts",
        hours: 12.0,
    },
    MilestoneTemplate {
        title: "Common Patterns & Techniques",
        description: "Learn frequently used patterns and best practices",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "Debugging & Problem Solving",
        description: "Develop skills to troubleshoot and solve common issues",
        hours: 8.0,
    },
    MilestoneTemplate {
        title: "Capstone Project",
        description: "Complete a comprehensive beginner-level project",
        hours: 15.0,
    },
];

const INTERMEDIATE: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        title: "Review & Foundation Check",
        description: "Refresh core {topic} concepts and identify knowledge gaps",
        hours: 6.0,
    },
    MilestoneTemplate {
        title: "Advanced Concepts - Part 1",
        description: "Explore intermediate-level techniques and methodologies",
        hours: 12.0,
    },
    MilestoneTemplate {
        title: "Advanced Concepts - Part 2",
        description: "Master complex patterns and architectural approaches",
        hours: 12.0,
    },
    MilestoneTemplate {
        title: "Performance & Optimization",
        description: "Learn to write efficient and optimized code",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "Real-World Application",
        description: "Work on practical, industry-relevant scenarios",
        hours: 15.0,
    },
    MilestoneTemplate {
        title: "Testing & Quality Assurance",
        description: "Implement testing strategies and ensure code quality",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "Integration Project",
        description: "Build a project integrating multiple concepts",
        hours: 18.0,
    },
    MilestoneTemplate {
        title: "Code Review & Refactoring",
        description: "Learn to review, improve, and refactor existing code",
        hours: 8.0,
    },
    MilestoneTemplate {
        title: "Final Portfolio Project",
        description: "Create a comprehensive project for your portfolio",
        hours: 20.0,
    },
];

const ADVANCED: &[MilestoneTemplate] = &[
    MilestoneTemplate {
        title: "Advanced Architecture",
        description: "Master advanced {topic} architecture and design patterns",
        hours: 15.0,
    },
    MilestoneTemplate {
        title: "System Design Principles",
        description: "Learn to design scalable and maintainable systems",
        hours: 12.0,
    },
    MilestoneTemplate {
        title: "Performance Engineering",
        description: "Deep dive into optimization and performance tuning",
        hours: 12.0,
    },
    MilestoneTemplate {
        title: "Security Best Practices",
        description: "Implement security measures and follow industry standards",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "Advanced Tooling & DevOps",
        description: "Master professional development tools and workflows",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "Complex Problem Solving",
        description: "Tackle challenging algorithmic and architectural problems",
        hours: 15.0,
    },
    MilestoneTemplate {
        title: "Industry Case Studies",
        description: "Analyze and learn from real-world industry implementations",
        hours: 10.0,
    },
    MilestoneTemplate {
        title: "Specialized Domain Project",
        description: "Build a specialized project in your area of interest",
        hours: 20.0,
    },
    MilestoneTemplate {
        title: "Open Source Contribution",
        description: "Contribute to open source projects and collaborate",
        hours: 15.0,
    },
    MilestoneTemplate {
        title: "Master Capstone Project",
        description: "Create an advanced, production-ready application",
        hours: 25.0,
    },
];

pub fn plan_for(difficulty: Difficulty) -> &'static [MilestoneTemplate] {
    match difficulty {
        Difficulty::Beginner => BEGINNER,
        Difficulty::Intermediate => INTERMEDIATE,
        Difficulty::Advanced => ADVANCED,
    }
}

impl MilestoneTemplate {
    pub fn render_description(&self, topic: &str) -> String {
        self.description.replace("{topic}", topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_lengths_per_difficulty() {
        assert_eq!(plan_for(Difficulty::Beginner).len(), 8);
        assert_eq!(plan_for(Difficulty::Intermediate).len(), 9);
        assert_eq!(plan_for(Difficulty::Advanced).len(), 10);
    }

    #[test]
    fn beginner_plan_matches_fixed_checklist() {
        let plan = plan_for(Difficulty::Beginner);
        assert_eq!(plan[0].title, "Introduction & Setup");
        assert_eq!(plan[0].hours, 5.0);
        assert_eq!(plan[7].title, "Capstone Project");
        assert_eq!(plan[7].hours, 15.0);
    }

    #[test]
    fn description_substitutes_topic() {
        let plan = plan_for(Difficulty::Beginner);
        assert_eq!(
            plan[0].render_description("Rust"),
            "Get familiar with Rust basics and set up your learning environment"
        );
        // Entries without a placeholder pass through unchanged.
        assert_eq!(
            plan[3].render_description("Rust"),
            "Apply what you've learned through guided exercises"
        );
    }
}
