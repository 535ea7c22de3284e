//! In-memory data store.
//!
//! Single-process, no persistence: the catalog is seeded at construction
//! and anything created at runtime lives until the process exits. Server
//! handlers share one instance behind `Arc<Mutex<..>>`.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::schema::{
    Difficulty, Exercise, Lesson, LessonContent, Module, NewLesson, NewModule, NewProgress,
    NewUser, User, UserProgress,
};

pub const DEFAULT_USER_ID: &str = "default-user";

pub struct MemStorage {
    users: HashMap<String, User>,
    lessons: HashMap<String, Lesson>,
    modules: HashMap<String, Module>,
    progress: HashMap<String, UserProgress>,
}

impl MemStorage {
    pub fn new() -> Self {
        let mut storage = Self {
            users: HashMap::new(),
            lessons: HashMap::new(),
            modules: HashMap::new(),
            progress: HashMap::new(),
        };
        storage.seed();
        storage
    }

    fn seed(&mut self) {
        self.users.insert(
            DEFAULT_USER_ID.to_string(),
            User {
                id: DEFAULT_USER_ID.to_string(),
                username: "student".to_string(),
                email: "student@cssacademy.com".to_string(),
                created_at: Utc::now(),
            },
        );

        for module in seed_modules() {
            self.modules.insert(module.id.clone(), module);
        }
        for lesson in seed_lessons() {
            self.lessons.insert(lesson.id.clone(), lesson);
        }
    }

    // ── Users ─────────────────────────────────────────────────────────

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    pub fn create_user(&mut self, new: NewUser) -> User {
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: new.username,
            email: new.email,
            created_at: Utc::now(),
        };
        self.users.insert(user.id.clone(), user.clone());
        user
    }

    // ── Lessons ───────────────────────────────────────────────────────

    pub fn lessons(&self) -> Vec<Lesson> {
        let mut all: Vec<Lesson> = self.lessons.values().cloned().collect();
        all.sort_by_key(|l| l.order);
        all
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons.get(id)
    }

    pub fn lessons_by_module(&self, module: &str) -> Vec<Lesson> {
        let mut filtered: Vec<Lesson> = self
            .lessons
            .values()
            .filter(|l| l.module == module)
            .cloned()
            .collect();
        filtered.sort_by_key(|l| l.order);
        filtered
    }

    pub fn create_lesson(&mut self, new: NewLesson) -> Lesson {
        let lesson = Lesson {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            module: new.module,
            order: new.order,
            duration: new.duration,
            difficulty: new.difficulty,
            content: new.content,
            exercises: new.exercises,
        };
        self.lessons.insert(lesson.id.clone(), lesson.clone());
        lesson
    }

    // ── Modules ───────────────────────────────────────────────────────

    pub fn modules(&self) -> Vec<Module> {
        let mut all: Vec<Module> = self.modules.values().cloned().collect();
        all.sort_by_key(|m| m.order);
        all
    }

    pub fn create_module(&mut self, new: NewModule) -> Module {
        let module = Module {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            order: new.order,
            icon: new.icon,
            total_lessons: new.total_lessons,
        };
        self.modules.insert(module.id.clone(), module.clone());
        module
    }

    // ── Progress ──────────────────────────────────────────────────────

    pub fn user_progress(&self, user_id: &str) -> Vec<UserProgress> {
        let mut rows: Vec<UserProgress> = self
            .progress
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; give callers a stable one.
        rows.sort_by(|a, b| a.lesson_id.cmp(&b.lesson_id));
        rows
    }

    pub fn progress_for_lesson(&self, user_id: &str, lesson_id: &str) -> Option<&UserProgress> {
        self.progress
            .values()
            .find(|p| p.user_id == user_id && p.lesson_id == lesson_id)
    }

    /// Insert or update the progress row for a (user, lesson) pair.
    /// `completed_at` is stamped when the row is marked completed and kept
    /// otherwise.
    pub fn upsert_progress(&mut self, new: NewProgress) -> UserProgress {
        let completed = new.completed.unwrap_or(false);
        let existing_id = self
            .progress
            .values()
            .find(|p| p.user_id == new.user_id && p.lesson_id == new.lesson_id)
            .map(|p| p.id.clone());

        let row = match existing_id {
            Some(id) => {
                let current = &self.progress[&id];
                UserProgress {
                    id: id.clone(),
                    user_id: new.user_id,
                    lesson_id: new.lesson_id,
                    completed,
                    completed_at: if completed {
                        Some(Utc::now())
                    } else {
                        current.completed_at
                    },
                    code_submissions: new.code_submissions.or_else(|| {
                        current.code_submissions.clone()
                    }),
                }
            }
            None => UserProgress {
                id: Uuid::new_v4().to_string(),
                user_id: new.user_id,
                lesson_id: new.lesson_id,
                completed,
                completed_at: if completed { Some(Utc::now()) } else { None },
                code_submissions: new.code_submissions,
            },
        };
        self.progress.insert(row.id.clone(), row.clone());
        row
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

// ── Seed catalog ──────────────────────────────────────────────────────

fn seed_modules() -> Vec<Module> {
    vec![
        Module {
            id: "grid-module".to_string(),
            name: "CSS Grid".to_string(),
            description: "Master CSS Grid layout system with hands-on exercises".to_string(),
            order: 1,
            icon: "fas fa-th".to_string(),
            total_lessons: 8,
        },
        Module {
            id: "flex-module".to_string(),
            name: "Flexbox".to_string(),
            description: "Learn flexible box layout for responsive designs".to_string(),
            order: 2,
            icon: "fas fa-arrows-alt".to_string(),
            total_lessons: 8,
        },
        Module {
            id: "position-module".to_string(),
            name: "CSS Position".to_string(),
            description: "Understanding positioning contexts and stacking".to_string(),
            order: 3,
            icon: "fas fa-layer-group".to_string(),
            total_lessons: 8,
        },
    ]
}

fn lesson(
    id: &str,
    title: &str,
    description: &str,
    module: &str,
    order: i32,
    duration: i32,
    difficulty: Difficulty,
    content: LessonContent,
    exercises: Vec<Exercise>,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        module: module.to_string(),
        order,
        duration,
        difficulty,
        content,
        exercises,
    }
}

fn content(introduction: &str, key_points: &[&str], code_example: &str) -> LessonContent {
    LessonContent {
        introduction: introduction.to_string(),
        key_points: key_points.iter().map(|p| p.to_string()).collect(),
        code_example: code_example.to_string(),
    }
}

fn exercise(instruction: &str, initial_code: &str, solution: &str) -> Exercise {
    Exercise {
        instruction: instruction.to_string(),
        initial_code: initial_code.to_string(),
        solution: solution.to_string(),
        hints: None,
    }
}

fn seed_lessons() -> Vec<Lesson> {
    vec![
        lesson(
            "grid-1",
            "Grid Container Basics",
            "Learn how to create a grid container and basic grid properties",
            "grid",
            1,
            5,
            Difficulty::Beginner,
            content(
                "CSS Grid is a two-dimensional layout system that allows you to create complex layouts with rows and columns.",
                &[
                    "Use display: grid to create a grid container",
                    "Grid items are direct children of grid containers",
                    "Grid creates implicit tracks automatically",
                ],
                ".container {\n  display: grid;\n  grid-template-columns: 1fr 1fr 1fr;\n  grid-template-rows: 100px 100px;\n  gap: 20px;\n}",
            ),
            vec![exercise(
                "Create a 3x2 grid with equal column widths",
                ".grid-container {\n  /* Add your CSS here */\n}",
                ".grid-container {\n  display: grid;\n  grid-template-columns: 1fr 1fr 1fr;\n  grid-template-rows: 100px 100px;\n}",
            )],
        ),
        lesson(
            "grid-2",
            "Grid Areas & Lines",
            "Understanding grid lines and how to place items",
            "grid",
            2,
            7,
            Difficulty::Beginner,
            content(
                "Grid lines are the dividing lines that make up the structure of the grid.",
                &[
                    "Grid lines are numbered starting from 1",
                    "Use grid-column and grid-row to position items",
                    "Negative numbers count from the end",
                ],
                ".item {\n  grid-column: 1 / 3;\n  grid-row: 2 / 4;\n}",
            ),
            vec![exercise(
                "Place an item spanning from column 2 to 4 and row 1 to 2",
                ".grid-item {\n  /* Add your CSS here */\n}",
                ".grid-item {\n  grid-column: 2 / 4;\n  grid-row: 1 / 2;\n}",
            )],
        ),
        lesson(
            "grid-3",
            "Auto-placement",
            "How grid automatically places items",
            "grid",
            3,
            6,
            Difficulty::Beginner,
            content(
                "Grid automatically places items that don't have explicit positions.",
                &[
                    "Items flow in row direction by default",
                    "Use grid-auto-flow to change direction",
                    "Auto-placement fills empty spaces",
                ],
                ".container {\n  grid-auto-flow: column;\n  grid-auto-columns: 1fr;\n}",
            ),
            vec![exercise(
                "Set auto-flow to column direction",
                ".grid-container {\n  display: grid;\n  /* Add auto-flow property */\n}",
                ".grid-container {\n  display: grid;\n  grid-auto-flow: column;\n}",
            )],
        ),
        lesson(
            "grid-4",
            "Grid Template Areas",
            "Learn how to create named grid areas for semantic layout control",
            "grid",
            4,
            8,
            Difficulty::Intermediate,
            content(
                "Grid template areas allow you to name sections of your grid layout, making it easier to understand and maintain.",
                &[
                    "Named areas make your CSS more readable and maintainable",
                    "The string format visually represents your grid layout",
                    "Easy to rearrange layout by modifying the template areas string",
                ],
                ".container {\n  display: grid;\n  grid-template-areas:\n    \"header header header\"\n    \"sidebar main main\"\n    \"footer footer footer\";\n  grid-template-rows: auto 1fr auto;\n  grid-template-columns: 200px 1fr 1fr;\n}\n\n.header { grid-area: header; }\n.sidebar { grid-area: sidebar; }\n.main { grid-area: main; }\n.footer { grid-area: footer; }",
            ),
            vec![exercise(
                "Create a layout with header, sidebar, main content, and footer using grid-template-areas",
                ".grid-container {\n  display: grid;\n  /* Add template areas */\n}\n\n.header { /* Add grid-area */ }\n.sidebar { /* Add grid-area */ }\n.main { /* Add grid-area */ }\n.footer { /* Add grid-area */ }",
                ".grid-container {\n  display: grid;\n  grid-template-areas:\n    \"header header header\"\n    \"sidebar main main\"\n    \"footer footer footer\";\n  grid-template-rows: auto 1fr auto;\n  grid-template-columns: 200px 1fr 1fr;\n}\n\n.header { grid-area: header; }\n.sidebar { grid-area: sidebar; }\n.main { grid-area: main; }\n.footer { grid-area: footer; }",
            )],
        ),
        lesson(
            "flex-1",
            "Flex Container Basics",
            "Introduction to flexbox and flex containers",
            "flexbox",
            1,
            5,
            Difficulty::Beginner,
            content(
                "Flexbox is a one-dimensional layout method for laying out items in rows or columns.",
                &[
                    "Use display: flex to create a flex container",
                    "Flex items are direct children of flex containers",
                    "Main axis and cross axis determine layout direction",
                ],
                ".flex-container {\n  display: flex;\n  flex-direction: row;\n  justify-content: space-between;\n  align-items: center;\n}",
            ),
            vec![exercise(
                "Create a flex container with items centered both horizontally and vertically",
                ".flex-container {\n  /* Add your CSS here */\n}",
                ".flex-container {\n  display: flex;\n  justify-content: center;\n  align-items: center;\n}",
            )],
        ),
        lesson(
            "position-1",
            "Static and Relative Positioning",
            "Understanding default positioning and relative positioning",
            "position",
            1,
            6,
            Difficulty::Beginner,
            content(
                "CSS positioning controls how elements are positioned in the document flow.",
                &[
                    "Static is the default position value",
                    "Relative positioning moves element relative to its normal position",
                    "Relative positioned elements maintain their space in the document flow",
                ],
                ".relative-item {\n  position: relative;\n  top: 20px;\n  left: 30px;\n}",
            ),
            vec![exercise(
                "Move an element 20px down and 15px right using relative positioning",
                ".positioned-element {\n  /* Add positioning CSS */\n}",
                ".positioned-element {\n  position: relative;\n  top: 20px;\n  left: 15px;\n}",
            )],
        ),
    ]
}
