use axum::Json;

use crate::models::{ProjectTimeEntry, SkillEntry};

/// Static reference table; no external dependency, cannot fail.
pub async fn get_skills() -> Json<Vec<SkillEntry>> {
    Json(vec![
        SkillEntry { skill: "Programmazione", level: 90 },
        SkillEntry { skill: "Elettronica", level: 85 },
        SkillEntry { skill: "Design", level: 75 },
        SkillEntry { skill: "Networking", level: 80 },
        SkillEntry { skill: "Sicurezza", level: 70 },
    ])
}

/// Static reference table; no external dependency, cannot fail.
pub async fn get_time() -> Json<Vec<ProjectTimeEntry>> {
    Json(vec![
        ProjectTimeEntry { project: "ESP3D BOX", hours: 120 },
        ProjectTimeEntry { project: "Simocoloweb", hours: 80 },
        ProjectTimeEntry { project: "Flipper Zero", hours: 60 },
        ProjectTimeEntry { project: "Bruce", hours: 40 },
        ProjectTimeEntry { project: "Website", hours: 100 },
    ])
}
