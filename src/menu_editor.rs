//! Menu Form State
//!
//! The add/edit form beside the menu table. Knows nothing about the view;
//! the menus page drives it and sends whatever `save_request` returns.

use crate::error::FormError;
use crate::models::{MenuPayload, MenuRow};
use crate::tree::descendants;

/// What a save should send
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(MenuPayload),
    Update(u64, MenuPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuForm {
    /// Row being edited; `None` while adding
    pub editing: Option<u64>,
    pub title: String,
    pub url: String,
    pub parent_id: Option<u64>,
    pub active: bool,
    pub post_id: Option<u64>,
    /// Shown in the readonly "Link Post" field
    pub post_title: String,
}

impl Default for MenuForm {
    fn default() -> Self {
        Self {
            editing: None,
            title: String::new(),
            url: String::new(),
            parent_id: None,
            active: true,
            post_id: None,
            post_title: String::new(),
        }
    }
}

impl MenuForm {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Fresh form for a new entry under `parent` (top level when `None`)
    pub fn open_add(&mut self, parent: Option<u64>) {
        *self = Self { parent_id: parent, ..Self::default() };
    }

    pub fn open_edit(&mut self, row: &MenuRow, post_title: Option<String>) {
        *self = Self {
            editing: Some(row.id),
            title: row.title.clone(),
            url: row.url.clone().unwrap_or_default(),
            parent_id: row.parent_id,
            active: row.active,
            post_id: row.post_id,
            post_title: post_title.unwrap_or_default(),
        };
    }

    pub fn link_post(&mut self, id: u64, title: &str) {
        self.post_id = Some(id);
        self.post_title = title.to_string();
    }

    pub fn unlink_post(&mut self) {
        self.post_id = None;
        self.post_title.clear();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self, rows: &[MenuRow]) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Required("Title"));
        }
        if let (Some(id), Some(parent)) = (self.editing, self.parent_id) {
            if parent == id || descendants(rows, id).contains(&parent) {
                return Err(FormError::InvalidParent);
            }
        }
        Ok(())
    }

    pub fn save_request(&self) -> SaveRequest {
        let payload = MenuPayload {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            parent_id: self.parent_id,
            active: self.active,
            post_id: self.post_id,
        };
        match self.editing {
            Some(id) => SaveRequest::Update(id, payload),
            None => SaveRequest::Create(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{flatten, make_node};

    fn rows() -> Vec<MenuRow> {
        // 1 ─ 2 ─ 3, plus 4 at the top
        flatten(&[
            make_node(1, Some(0), vec![make_node(2, Some(0), vec![make_node(3, Some(0), vec![])])]),
            make_node(4, Some(1), vec![]),
        ])
    }

    #[test]
    fn test_add_clears_previous_edit() {
        let rows = rows();
        let mut form = MenuForm::default();
        form.open_edit(&rows[1], Some("History".into()));
        assert!(form.is_editing());

        form.open_add(Some(4));
        assert_eq!(form.editing, None);
        assert_eq!(form.parent_id, Some(4));
        assert!(form.title.is_empty());
        assert!(form.active);
        assert_eq!(form.post_id, None);
    }

    #[test]
    fn test_edit_loads_row() {
        let mut row = rows()[1].clone();
        row.url = Some("/about".into());
        row.post_id = Some(12);
        row.active = false;

        let mut form = MenuForm::default();
        form.open_edit(&row, Some("Our history".into()));
        assert_eq!(form.editing, Some(2));
        assert_eq!(form.url, "/about");
        assert_eq!(form.parent_id, Some(1));
        assert!(!form.active);
        assert_eq!(form.post_title, "Our history");
    }

    #[test]
    fn test_title_required() {
        let mut form = MenuForm::default();
        form.title = "   ".into();
        assert_eq!(form.validate(&rows()), Err(FormError::Required("Title")));
    }

    #[test]
    fn test_parent_cannot_be_self_or_descendant() {
        let rows = rows();
        let mut form = MenuForm::default();
        form.open_edit(&rows[0], None);

        form.parent_id = Some(1);
        assert_eq!(form.validate(&rows), Err(FormError::InvalidParent));
        form.parent_id = Some(3);
        assert_eq!(form.validate(&rows), Err(FormError::InvalidParent));
        form.parent_id = Some(4);
        assert_eq!(form.validate(&rows), Ok(()));
    }

    #[test]
    fn test_save_request_kind() {
        let mut form = MenuForm::default();
        form.open_add(Some(1));
        form.title = " Contact ".into();
        form.link_post(9, "Contact us");
        match form.save_request() {
            SaveRequest::Create(p) => {
                assert_eq!(p.title, "Contact");
                assert_eq!(p.parent_id, Some(1));
                assert_eq!(p.post_id, Some(9));
            }
            other => panic!("expected create, got {:?}", other),
        }

        form.open_edit(&rows()[3], None);
        form.unlink_post();
        assert!(matches!(form.save_request(), SaveRequest::Update(4, _)));
        assert_eq!(form.post_title, "");
    }
}
