use crate::error::LessonIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MODULE_COUNT: u8 = 20;
pub const LESSONS_PER_MODULE: u8 = 10;
/// 20 módulos * 10 lecciones
pub const TOTAL_LESSONS: usize = MODULE_COUNT as usize * LESSONS_PER_MODULE as usize;

/// Circunferencia del anillo de progreso (stroke-dasharray del original)
pub const RING_CIRCUMFERENCE: f32 = 113.0;

/// Identificador compuesto "modulo-leccion", ordenado por (módulo, lección).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LessonId {
    module: u8,
    lesson: u8,
}

impl LessonId {
    pub fn new(module: u8, lesson: u8) -> Result<Self, LessonIdError> {
        if !(1..=MODULE_COUNT).contains(&module) || !(1..=LESSONS_PER_MODULE).contains(&lesson) {
            return Err(LessonIdError::OutOfRange {
                module: module as u32,
                lesson: lesson as u32,
            });
        }
        Ok(Self { module, lesson })
    }

    pub fn module(&self) -> u8 {
        self.module
    }

    pub fn lesson(&self) -> u8 {
        self.lesson
    }

    /// Recorre los 200 identificadores válidos en orden.
    pub fn all() -> impl Iterator<Item = LessonId> {
        (1..=MODULE_COUNT).flat_map(|module| {
            (1..=LESSONS_PER_MODULE).map(move |lesson| LessonId { module, lesson })
        })
    }
}

impl Default for LessonId {
    fn default() -> Self {
        Self { module: 1, lesson: 1 }
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.module, self.lesson)
    }
}

impl FromStr for LessonId {
    type Err = LessonIdError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        if token.is_empty() {
            return Err(LessonIdError::Empty);
        }
        let (module, lesson) = token
            .split_once('-')
            .ok_or_else(|| LessonIdError::Malformed(token.to_string()))?;

        let parse_part = |part: &str| -> Result<u32, LessonIdError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(LessonIdError::Malformed(token.to_string()));
            }
            part.parse::<u32>()
                .map_err(|_| LessonIdError::Malformed(token.to_string()))
        };
        let (module, lesson) = (parse_part(module)?, parse_part(lesson)?);

        match (u8::try_from(module), u8::try_from(lesson)) {
            (Ok(m), Ok(l)) => LessonId::new(m, l),
            _ => Err(LessonIdError::OutOfRange { module, lesson }),
        }
    }
}

impl TryFrom<String> for LessonId {
    type Error = LessonIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LessonId> for String {
    fn from(id: LessonId) -> Self {
        id.to_string()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Texto del botón de tema
    pub fn label(self) -> String {
        format!("INTERFAZ: {}", self.as_str().to_uppercase())
    }

    /// Cualquier valor desconocido vuelve al tema oscuro.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => {
                if !other.is_empty() {
                    log::warn!("Tema persistido desconocido {other:?}, se usa dark");
                }
                Theme::Dark
            }
        }
    }
}

/// Proporción derivada |completadas| / 200, siempre dentro de [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRatio(f64);

impl ProgressRatio {
    pub fn from_completed(completed: usize) -> Self {
        let ratio = completed as f64 / TOTAL_LESSONS as f64;
        Self(ratio.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn percent(self) -> f64 {
        self.0 * 100.0
    }

    /// Redondeo de `Math.round`: la mitad sube (0.5 -> 1).
    pub fn percent_rounded(self) -> u32 {
        (self.percent() + 0.5).floor() as u32
    }

    pub fn percent_label(self) -> String {
        format!("{}%", self.percent_rounded())
    }

    /// Desplazamiento del trazo del anillo: lleno cuando vale 0.
    pub fn dash_offset(self) -> f32 {
        RING_CIRCUMFERENCE - RING_CIRCUMFERENCE * self.0 as f32
    }
}
