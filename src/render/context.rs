use serde::Serialize;

use crate::contact::ContactForm;
use crate::content::{Site, SkillGroup};
use crate::nav::Navigation;
use crate::notice::Notice;
use crate::surface::{Element, ElementId};
use crate::theme::AppearanceMode;

/// A live decorative element, ready for markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub id: u64,
    pub class: String,
    pub style: String,
}

impl ParticleView {
    pub fn new(id: ElementId, element: &Element) -> Self {
        Self {
            id: id.0,
            class: element.class.clone(),
            style: element.style.to_css(),
        }
    }
}

/// Everything the `page` template reads.
#[derive(Debug, Clone, Serialize)]
pub struct PageContext<'a> {
    pub site: &'a Site,
    pub skill_groups: Vec<SkillGroup>,
    pub appearance: AppearanceMode,
    pub dark: bool,
    pub toggle_label: &'static str,
    pub nav: &'a Navigation,
    pub form: &'a ContactForm,
    pub notices: &'a [Notice],
    pub particles: Vec<ParticleView>,
}

impl<'a> PageContext<'a> {
    pub fn new(
        site: &'a Site,
        appearance: AppearanceMode,
        nav: &'a Navigation,
        form: &'a ContactForm,
        notices: &'a [Notice],
    ) -> Self {
        Self {
            site,
            skill_groups: site.skills_by_category(),
            appearance,
            dark: appearance.is_dark(),
            toggle_label: appearance.toggle_label(),
            nav,
            form,
            notices,
            particles: Vec::new(),
        }
    }

    pub fn with_particles<'e>(
        mut self,
        elements: impl IntoIterator<Item = (ElementId, &'e Element)>,
    ) -> Self {
        self.particles = elements
            .into_iter()
            .map(|(id, element)| ParticleView::new(id, element))
            .collect();
        self
    }
}
