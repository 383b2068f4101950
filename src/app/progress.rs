use super::*;
use crate::app::view_models::{ModuleGroup, NavItem, ProgressView};
use crate::model::{LESSONS_PER_MODULE, MODULE_COUNT, TOTAL_LESSONS};

impl Academy {
    /// Añade la lección a completadas y persiste sólo si es nueva.
    pub(crate) fn register_progress(&mut self, id: LessonId) -> bool {
        if !self.session.mark_completed(id) {
            return false;
        }
        self.store.set_completed(self.session.completed());
        true
    }

    pub fn progress_view(&self) -> ProgressView {
        let ratio = self.session.progress();
        ProgressView {
            completed: self.session.completed().len(),
            total: TOTAL_LESSONS,
            ratio: ratio.value() as f32,
            percent_label: ratio.percent_label(),
            dash_offset: ratio.dash_offset(),
        }
    }

    /// Menú lateral: los 20 módulos con sus 10 lecciones.
    pub fn nav_groups(&self) -> Vec<ModuleGroup> {
        (1..=MODULE_COUNT)
            .map(|module| {
                let items = (1..=LESSONS_PER_MODULE)
                    .filter_map(|lesson| LessonId::new(module, lesson).ok())
                    .map(|id| NavItem {
                        id,
                        label: self.catalog.nav_label(id),
                        active: id == self.session.active,
                        completed: self.session.is_completed(id),
                    })
                    .collect::<Vec<_>>();
                ModuleGroup {
                    number: module,
                    title: self.catalog.module_title(module),
                    completed: items.iter().filter(|i| i.completed).count(),
                    items,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::MemorySurface;

    #[test]
    fn nav_groups_cover_the_whole_universe() {
        let mut academy = Academy::new(
            PreferenceStore::in_memory(),
            Box::new(MemorySurface::default()),
            read_catalog_embedded(),
        );
        academy.navigate_to("2-3").expect("valid token");

        let groups = academy.nav_groups();
        assert_eq!(groups.len(), 20);
        assert!(groups.iter().all(|g| g.items.len() == 10));

        let active: Vec<_> = groups.iter().flat_map(|g| &g.items).filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id.to_string(), "2-3");
        assert!(active[0].completed);
        assert_eq!(groups[1].completed, 1);
        assert_eq!(groups[1].title, "Texto y semántica");
    }

    #[test]
    fn progress_view_tracks_the_ring() {
        let mut academy = Academy::new(
            PreferenceStore::in_memory(),
            Box::new(MemorySurface::default()),
            Catalog::default(),
        );
        for token in ["1-1", "1-2", "1-3", "1-4"] {
            academy.navigate_to(token).expect("valid token");
        }
        let view = academy.progress_view();
        assert_eq!(view.completed, 4);
        assert_eq!(view.total, 200);
        assert_eq!(view.percent_label, "2%");
        assert!(view.dash_offset < 113.0 && view.dash_offset > 110.0);
    }
}
