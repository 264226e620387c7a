//! Admin panel
//!
//! The admin console is a tabbed list/form editor. [`PanelState`] tracks
//! which tab is showing and whether a form or a delete confirmation is open;
//! every transition is checked here so the driver cannot, for instance,
//! submit a form that was never opened.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;
use uuid::Uuid;

/// Admin console tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Photos,
    Models,
    Games,
    Inventory,
    Orders,
    Settings,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 6] = [
        Self::Photos,
        Self::Models,
        Self::Games,
        Self::Inventory,
        Self::Orders,
        Self::Settings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Photos => "photos",
            Self::Models => "models",
            Self::Games => "games",
            Self::Inventory => "inventory",
            Self::Orders => "orders",
            Self::Settings => "settings",
        }
    }

    /// Whether new records can be created from this tab.
    pub const fn can_create(self) -> bool {
        matches!(
            self,
            Self::Photos | Self::Models | Self::Games | Self::Inventory
        )
    }

    /// Whether existing records can be edited through a form.
    pub const fn can_edit(self) -> bool {
        matches!(self, Self::Photos | Self::Models | Self::Games)
    }

    /// Whether records can be deleted from this tab.
    pub const fn can_delete(self) -> bool {
        matches!(
            self,
            Self::Photos | Self::Models | Self::Games | Self::Inventory
        )
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tab name.
#[derive(Debug, Error, PartialEq)]
#[error("unknown admin tab `{0}`")]
pub struct UnknownTab(String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// What an open form will do when submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Where the admin panel is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Idle,
    Loading(Tab),
    ListShown(Tab),
    FormOpen(Tab, FormMode),
    ConfirmDelete(Tab, Uuid),
}

impl Display for PanelState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading(tab) => write!(f, "loading {tab}"),
            Self::ListShown(tab) => write!(f, "showing {tab}"),
            Self::FormOpen(tab, FormMode::Create) => write!(f, "creating in {tab}"),
            Self::FormOpen(tab, FormMode::Edit(id)) => write!(f, "editing {id} in {tab}"),
            Self::ConfirmDelete(tab, id) => write!(f, "confirming delete of {id} in {tab}"),
        }
    }
}

/// A transition the panel refused.
#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    #[error("cannot {action} while {state}")]
    InvalidState {
        state: PanelState,
        action: &'static str,
    },

    #[error("the {tab} tab does not support {action}")]
    Unsupported { tab: Tab, action: &'static str },
}

impl PanelState {
    /// The tab in view, if any.
    pub const fn tab(self) -> Option<Tab> {
        match self {
            Self::Idle => None,
            Self::Loading(tab)
            | Self::ListShown(tab)
            | Self::FormOpen(tab, _)
            | Self::ConfirmDelete(tab, _) => Some(tab),
        }
    }

    /// The tab being loaded.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless loading.
    pub fn loading_tab(self) -> Result<Tab, TransitionError> {
        match self {
            Self::Loading(tab) => Ok(tab),
            _ => Err(self.invalid("load records")),
        }
    }

    fn invalid(self, action: &'static str) -> TransitionError {
        TransitionError::InvalidState {
            state: self,
            action,
        }
    }

    /// Start loading `tab`. Allowed from idle or from any list.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] while loading, or while a form
    /// or delete confirmation is open.
    pub fn select_tab(self, tab: Tab) -> Result<Self, TransitionError> {
        match self {
            Self::Idle | Self::ListShown(_) => Ok(Self::Loading(tab)),
            _ => Err(self.invalid("select a tab")),
        }
    }

    /// Records for the loading tab have arrived.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless loading.
    pub fn finish_loading(self) -> Result<Self, TransitionError> {
        match self {
            Self::Loading(tab) => Ok(Self::ListShown(tab)),
            _ => Err(self.invalid("finish loading")),
        }
    }

    /// Refetch the list on screen.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless a list is shown.
    pub fn refresh(self) -> Result<Self, TransitionError> {
        match self {
            Self::ListShown(tab) => Ok(Self::Loading(tab)),
            _ => Err(self.invalid("refresh")),
        }
    }

    /// Open an empty form for a new record.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::InvalidState`]: no list is shown.
    /// - [`TransitionError::Unsupported`]: the tab has no create form.
    pub fn open_create(self) -> Result<Self, TransitionError> {
        match self {
            Self::ListShown(tab) if tab.can_create() => Ok(Self::FormOpen(tab, FormMode::Create)),
            Self::ListShown(tab) => Err(TransitionError::Unsupported {
                tab,
                action: "creating records",
            }),
            _ => Err(self.invalid("open a create form")),
        }
    }

    /// Open the form for an existing record.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::InvalidState`]: no list is shown.
    /// - [`TransitionError::Unsupported`]: the tab has no edit form.
    pub fn open_edit(self, id: Uuid) -> Result<Self, TransitionError> {
        match self {
            Self::ListShown(tab) if tab.can_edit() => Ok(Self::FormOpen(tab, FormMode::Edit(id))),
            Self::ListShown(tab) => Err(TransitionError::Unsupported {
                tab,
                action: "editing records",
            }),
            _ => Err(self.invalid("open an edit form")),
        }
    }

    /// Close the open form without saving.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless a form is open.
    pub fn cancel_form(self) -> Result<Self, TransitionError> {
        match self {
            Self::FormOpen(tab, _) => Ok(Self::ListShown(tab)),
            _ => Err(self.invalid("cancel a form")),
        }
    }

    /// The open form was saved; the list is refetched. Returns the form mode
    /// alongside the new state.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless a form is open.
    pub fn form_submitted(self) -> Result<(Self, FormMode), TransitionError> {
        match self {
            Self::FormOpen(tab, mode) => Ok((Self::Loading(tab), mode)),
            _ => Err(self.invalid("submit a form")),
        }
    }

    /// Ask for confirmation before deleting `id`.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::InvalidState`]: no list is shown.
    /// - [`TransitionError::Unsupported`]: the tab does not delete records.
    pub fn request_delete(self, id: Uuid) -> Result<Self, TransitionError> {
        match self {
            Self::ListShown(tab) if tab.can_delete() => Ok(Self::ConfirmDelete(tab, id)),
            Self::ListShown(tab) => Err(TransitionError::Unsupported {
                tab,
                action: "deleting records",
            }),
            _ => Err(self.invalid("request a delete")),
        }
    }

    /// Delete confirmed; returns the record to delete and moves to loading.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless a confirmation is pending.
    pub fn confirm_delete(self) -> Result<(Self, Uuid), TransitionError> {
        match self {
            Self::ConfirmDelete(tab, id) => Ok((Self::Loading(tab), id)),
            _ => Err(self.invalid("confirm a delete")),
        }
    }

    /// Back out of a pending delete.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidState`] unless a confirmation is pending.
    pub fn cancel_delete(self) -> Result<Self, TransitionError> {
        match self {
            Self::ConfirmDelete(tab, _) => Ok(Self::ListShown(tab)),
            _ => Err(self.invalid("cancel a delete")),
        }
    }

    /// Leave the panel. Always succeeds.
    pub const fn close(self) -> Self {
        Self::Idle
    }
}
