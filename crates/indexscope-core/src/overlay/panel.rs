use crate::placement::Placement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// The single live instance of one overlay card. Never destroyed, only hidden.
#[derive(Debug, Clone)]
pub struct Panel<T> {
    visibility: Visibility,
    content: Option<T>,
    placement: Option<Placement>,
    attached: bool,
}

impl<T> Default for Panel<T> {
    fn default() -> Self {
        Self {
            visibility: Visibility::Hidden,
            content: None,
            placement: None,
            attached: false,
        }
    }
}

impl<T> Panel<T> {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Last rendered content; kept while hidden.
    pub fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Visible content only.
    pub fn shown(&self) -> Option<(&T, &Placement)> {
        if !self.is_visible() {
            return None;
        }
        Some((self.content.as_ref()?, self.placement.as_ref()?))
    }

    pub(crate) fn attach(&mut self) -> bool {
        let first = !self.attached;
        self.attached = true;
        first
    }

    pub(crate) fn present(&mut self, content: T, placement: Placement) {
        self.content = Some(content);
        self.placement = Some(placement);
        self.visibility = Visibility::Visible;
    }

    /// Returns whether anything changed.
    pub(crate) fn hide(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.visibility = Visibility::Hidden;
        was_visible
    }
}
