// src/app/view_models.rs

use crate::model::LessonId;

#[derive(Clone, Debug)]
pub struct NavItem {
    pub id: LessonId,
    pub label: String,
    pub active: bool,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct ModuleGroup {
    pub number: u8,
    pub title: String,
    pub completed: usize, // lecciones visitadas del módulo
    pub items: Vec<NavItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressView {
    pub completed: usize,
    pub total: usize,
    pub ratio: f32,
    pub percent_label: String,
    pub dash_offset: f32,
}

impl NavItem {
    pub fn label(&self) -> String {
        if self.completed {
            format!("{} ✅", self.label)
        } else {
            self.label.clone()
        }
    }
}

impl ModuleGroup {
    pub fn header(&self) -> String {
        format!(
            "MÓDULO {} · {} ({}/{})",
            self.number,
            self.title,
            self.completed,
            self.items.len()
        )
    }
}
