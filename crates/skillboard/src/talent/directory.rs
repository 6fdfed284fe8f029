use super::domain::{
    Availability, Employee, EmployeeId, GapPriority, LearningPath, PathDifficulty, PathStatus,
    ProjectMatch, Skill, SkillCategory, SkillGap, Trend,
};

/// Read-only store behind every workspace view. Seeded in-process; the match
/// board can be swapped for an imported one, the rest never changes after load.
#[derive(Debug, Clone)]
pub struct TalentDirectory {
    employees: Vec<Employee>,
    skill_gaps: Vec<SkillGap>,
    learning_paths: Vec<LearningPath>,
    match_board: Vec<ProjectMatch>,
}

impl TalentDirectory {
    pub fn seeded() -> Self {
        Self {
            employees: seeded_employees(),
            skill_gaps: seeded_skill_gaps(),
            learning_paths: seeded_learning_paths(),
            match_board: seeded_match_board(),
        }
    }

    /// Replaces the match board, keeping the seeded directory data.
    pub fn with_match_board(mut self, rows: Vec<ProjectMatch>) -> Self {
        self.match_board = rows;
        self
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Unknown ids resolve to `None`; callers render a placeholder instead of failing.
    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    pub fn skill_gaps(&self) -> &[SkillGap] {
        &self.skill_gaps
    }

    pub fn learning_paths(&self) -> &[LearningPath] {
        &self.learning_paths
    }

    pub fn path(&self, id: &str) -> Option<&LearningPath> {
        self.learning_paths.iter().find(|path| path.id == id)
    }

    pub fn match_board(&self) -> &[ProjectMatch] {
        &self.match_board
    }
}

fn skill(name: &str, category: SkillCategory, proficiency: u8, target: u8, trend: Trend) -> Skill {
    Skill {
        name: name.to_string(),
        category,
        proficiency,
        target_proficiency: target,
        trend,
    }
}

fn seeded_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: EmployeeId("emp-001".to_string()),
            name: "Sarah Chen".to_string(),
            role: "Senior Frontend Developer".to_string(),
            department: "Engineering".to_string(),
            avatar: Some("/avatars/sarah-chen.png".to_string()),
            availability: Availability::Available,
            skills: vec![
                skill("React", SkillCategory::Technical, 92, 95, Trend::Up),
                skill("TypeScript", SkillCategory::Technical, 88, 90, Trend::Stable),
                skill("GraphQL", SkillCategory::Technical, 45, 70, Trend::Up),
                skill("Mentoring", SkillCategory::Leadership, 75, 80, Trend::Stable),
            ],
        },
        Employee {
            id: EmployeeId("emp-002".to_string()),
            name: "Marcus Johnson".to_string(),
            role: "Data Scientist".to_string(),
            department: "Analytics".to_string(),
            avatar: Some("/avatars/marcus-johnson.png".to_string()),
            availability: Availability::Busy,
            skills: vec![
                skill("Machine Learning", SkillCategory::Technical, 82, 90, Trend::Up),
                skill("Python", SkillCategory::Technical, 90, 92, Trend::Stable),
                skill("Data Visualization", SkillCategory::Technical, 70, 80, Trend::Up),
                skill("Communication", SkillCategory::Soft, 68, 75, Trend::Up),
            ],
        },
        Employee {
            id: EmployeeId("emp-003".to_string()),
            name: "Taylor Swift".to_string(),
            role: "UX Designer".to_string(),
            department: "Design".to_string(),
            avatar: Some("/avatars/taylor-swift.png".to_string()),
            availability: Availability::Available,
            skills: vec![
                skill("Figma", SkillCategory::Technical, 94, 95, Trend::Stable),
                skill("User Research", SkillCategory::Domain, 86, 90, Trend::Up),
                skill("Design Systems", SkillCategory::Domain, 81, 85, Trend::Up),
                skill("Public Speaking", SkillCategory::Soft, 55, 65, Trend::Stable),
            ],
        },
        Employee {
            id: EmployeeId("emp-004".to_string()),
            name: "Priya Patel".to_string(),
            role: "Backend Developer".to_string(),
            department: "Engineering".to_string(),
            avatar: None,
            availability: Availability::OnLeave,
            skills: vec![
                skill("Go", SkillCategory::Technical, 84, 90, Trend::Up),
                skill("PostgreSQL", SkillCategory::Technical, 88, 90, Trend::Stable),
                skill("Cloud Architecture", SkillCategory::Technical, 58, 85, Trend::Up),
                skill("Incident Response", SkillCategory::Domain, 72, 75, Trend::Down),
            ],
        },
        Employee {
            id: EmployeeId("emp-005".to_string()),
            name: "James O'Connor".to_string(),
            role: "Product Manager".to_string(),
            department: "Product".to_string(),
            avatar: Some("/avatars/james-oconnor.png".to_string()),
            availability: Availability::Busy,
            skills: vec![
                skill("Roadmapping", SkillCategory::Domain, 85, 88, Trend::Stable),
                skill(
                    "Stakeholder Management",
                    SkillCategory::Leadership,
                    80,
                    85,
                    Trend::Up,
                ),
                skill("Data Analysis", SkillCategory::Technical, 62, 75, Trend::Up),
                skill("Negotiation", SkillCategory::Soft, 77, 80, Trend::Stable),
            ],
        },
    ]
}

fn seeded_skill_gaps() -> Vec<SkillGap> {
    vec![
        SkillGap {
            skill: "Cloud Architecture".to_string(),
            current: 58,
            required: 85,
            gap: 27,
            priority: GapPriority::High,
        },
        SkillGap {
            skill: "Machine Learning".to_string(),
            current: 64,
            required: 80,
            gap: 16,
            priority: GapPriority::High,
        },
        SkillGap {
            skill: "GraphQL".to_string(),
            current: 45,
            required: 70,
            gap: 25,
            priority: GapPriority::Medium,
        },
        SkillGap {
            skill: "Data Visualization".to_string(),
            current: 70,
            required: 80,
            gap: 10,
            priority: GapPriority::Medium,
        },
        SkillGap {
            skill: "Public Speaking".to_string(),
            current: 55,
            required: 65,
            gap: 10,
            priority: GapPriority::Low,
        },
    ]
}

fn seeded_learning_paths() -> Vec<LearningPath> {
    vec![
        LearningPath {
            id: "path-001".to_string(),
            title: "Cloud Architecture Fundamentals".to_string(),
            description: "Design resilient cloud topologies and practice cost-aware capacity planning."
                .to_string(),
            duration: "8 weeks".to_string(),
            skills: vec![
                "Cloud Architecture".to_string(),
                "AWS".to_string(),
                "System Design".to_string(),
            ],
            progress: 35,
            status: PathStatus::InProgress,
            difficulty: PathDifficulty::Intermediate,
        },
        LearningPath {
            id: "path-002".to_string(),
            title: "Machine Learning Foundations".to_string(),
            description: "From feature engineering to model evaluation with production guardrails."
                .to_string(),
            duration: "10 weeks".to_string(),
            skills: vec![
                "Machine Learning".to_string(),
                "Python".to_string(),
                "Statistics".to_string(),
            ],
            progress: 0,
            status: PathStatus::NotStarted,
            difficulty: PathDifficulty::Advanced,
        },
        LearningPath {
            id: "path-003".to_string(),
            title: "Advanced React Patterns".to_string(),
            description: "Composition, concurrency-safe data fetching, and render performance tuning."
                .to_string(),
            duration: "6 weeks".to_string(),
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Performance Tuning".to_string(),
            ],
            progress: 72,
            status: PathStatus::InProgress,
            difficulty: PathDifficulty::Advanced,
        },
        LearningPath {
            id: "path-004".to_string(),
            title: "Data Storytelling".to_string(),
            description: "Turn analysis into narratives that land with non-technical audiences."
                .to_string(),
            duration: "4 weeks".to_string(),
            skills: vec!["Data Visualization".to_string(), "Communication".to_string()],
            progress: 100,
            status: PathStatus::Completed,
            difficulty: PathDifficulty::Beginner,
        },
        LearningPath {
            id: "path-005".to_string(),
            title: "GraphQL API Design".to_string(),
            description: "Schema-first API modelling, resolver patterns, and federation basics."
                .to_string(),
            duration: "5 weeks".to_string(),
            skills: vec!["GraphQL".to_string(), "API Design".to_string()],
            progress: 0,
            status: PathStatus::NotStarted,
            difficulty: PathDifficulty::Intermediate,
        },
    ]
}

fn seeded_match_board() -> Vec<ProjectMatch> {
    vec![
        ProjectMatch {
            employee_id: EmployeeId("emp-001".to_string()),
            employee_name: "Sarah Chen".to_string(),
            role: "Senior Frontend Developer".to_string(),
            match_score: 92,
            skills_matched: vec!["React".to_string(), "TypeScript".to_string()],
            skills_missing: vec!["GraphQL".to_string()],
            availability: Availability::Available,
            growth_potential: 70,
        },
        ProjectMatch {
            employee_id: EmployeeId("emp-002".to_string()),
            employee_name: "Marcus Johnson".to_string(),
            role: "Data Scientist".to_string(),
            match_score: 88,
            skills_matched: vec!["Python".to_string(), "Machine Learning".to_string()],
            skills_missing: vec!["Deep Learning".to_string(), "MLOps".to_string()],
            availability: Availability::Busy,
            growth_potential: 82,
        },
        ProjectMatch {
            employee_id: EmployeeId("emp-003".to_string()),
            employee_name: "Taylor Swift".to_string(),
            role: "UX Designer".to_string(),
            match_score: 85,
            skills_matched: vec![
                "Figma".to_string(),
                "User Research".to_string(),
                "Design Systems".to_string(),
            ],
            skills_missing: vec!["Motion Design".to_string()],
            availability: Availability::Available,
            growth_potential: 88,
        },
        ProjectMatch {
            employee_id: EmployeeId("emp-004".to_string()),
            employee_name: "Priya Patel".to_string(),
            role: "Backend Developer".to_string(),
            match_score: 78,
            skills_matched: vec!["Go".to_string(), "PostgreSQL".to_string()],
            skills_missing: vec!["Cloud Architecture".to_string(), "Kubernetes".to_string()],
            availability: Availability::OnLeave,
            growth_potential: 75,
        },
        ProjectMatch {
            employee_id: EmployeeId("emp-005".to_string()),
            employee_name: "James O'Connor".to_string(),
            role: "Product Manager".to_string(),
            match_score: 71,
            skills_matched: vec![
                "Roadmapping".to_string(),
                "Stakeholder Management".to_string(),
            ],
            skills_missing: vec!["Data Analysis".to_string(), "SQL".to_string()],
            availability: Availability::Busy,
            growth_potential: 64,
        },
    ]
}
