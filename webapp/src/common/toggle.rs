// the two pieces of local ui state owned by the navigation bar
//
// each is a two-valued enum rather than a bool so that call sites read as transitions

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Hidden,
    Shown,
}

impl PreviewState {
    pub fn on_pointer_enter(self) -> Self {
        Self::Shown
    }

    pub fn on_pointer_leave(self) -> Self {
        Self::Hidden
    }

    // the native disclosure on mobile flips the state on each press
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

// menu and preview together, as the navigation bar holds them
//
// the mobile disclosure only exists while the menu is open and always mounts closed, so every
// menu transition hides the preview as well
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub preview: PreviewState,
}

impl NavState {
    pub fn menu_toggled(self) -> Self {
        NavState {
            menu: self.menu.toggled(),
            preview: PreviewState::Hidden,
        }
    }

    pub fn menu_closed(self) -> Self {
        NavState {
            menu: MenuState::Closed,
            preview: PreviewState::Hidden,
        }
    }

    pub fn on_pointer_enter(self) -> Self {
        NavState {
            preview: self.preview.on_pointer_enter(),
            ..self
        }
    }

    pub fn on_pointer_leave(self) -> Self {
        NavState {
            preview: self.preview.on_pointer_leave(),
            ..self
        }
    }

    pub fn disclosure_toggled(self) -> Self {
        NavState {
            preview: self.preview.toggled(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn menu_toggle_twice_is_identity() {
        let menu = MenuState::default();

        assert!(menu.toggled().is_open());
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn preview_enter_then_leave_hides() {
        let preview = PreviewState::default();

        assert!(preview.on_pointer_enter().is_shown());
        assert_eq!(preview.on_pointer_enter().on_pointer_leave(), PreviewState::Hidden);
    }

    #[test]
    fn preview_pointer_events_are_idempotent() {
        let shown = PreviewState::Hidden.on_pointer_enter();

        assert_eq!(shown.on_pointer_enter(), PreviewState::Shown);
        assert_eq!(PreviewState::Hidden.on_pointer_leave(), PreviewState::Hidden);
    }

    #[test]
    fn preview_disclosure_toggles() {
        assert_eq!(PreviewState::Hidden.toggled(), PreviewState::Shown);
        assert_eq!(PreviewState::Shown.toggled(), PreviewState::Hidden);
    }

    #[test]
    fn closing_the_menu_hides_an_open_disclosure() {
        let open = NavState::default().menu_toggled().disclosure_toggled();
        assert_eq!(open.preview, PreviewState::Shown);

        let closed = open.menu_toggled();
        assert_eq!(closed, NavState::default());

        let clicked = open.menu_closed();
        assert_eq!(clicked, NavState::default());
    }

    #[test]
    fn reopened_disclosure_tracks_the_control() {
        let reopened = NavState::default()
            .menu_toggled()
            .disclosure_toggled()
            .menu_toggled()
            .menu_toggled();

        assert!(reopened.menu.is_open());
        assert_eq!(reopened.preview, PreviewState::Hidden);
        assert_eq!(reopened.disclosure_toggled().preview, PreviewState::Shown);
    }

    #[test]
    fn pointer_events_leave_the_menu_alone() {
        let open = NavState::default().menu_toggled();

        assert_eq!(open.on_pointer_enter().menu, MenuState::Open);
        assert_eq!(open.on_pointer_enter().on_pointer_leave(), open);
    }
}
