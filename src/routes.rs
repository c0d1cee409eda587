//! Route paths used for navigation and share links

/// Addressable screens of the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/new`
    NewForm,
    /// `/form/{id}`
    Fill(String),
    /// `/form/{id}/edit`
    Edit(String),
    /// `/form/{id}/responses`
    Responses(String),
}

impl Route {
    /// Parse a path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path
            .trim_end_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Some(Self::List),
            ["new"] => Some(Self::NewForm),
            ["form", id] => Some(Self::Fill(id.to_string())),
            ["form", id, "edit"] => Some(Self::Edit(id.to_string())),
            ["form", id, "responses"] => Some(Self::Responses(id.to_string())),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::NewForm => "/new".to_string(),
            Self::Fill(id) => format!("/form/{id}"),
            Self::Edit(id) => format!("/form/{id}/edit"),
            Self::Responses(id) => format!("/form/{id}/responses"),
        }
    }

    /// Check if this route edits a form or a response
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::NewForm | Self::Edit(_) | Self::Fill(_))
    }

    /// Form the route addresses, if any
    pub fn form_id(&self) -> Option<&str> {
        match self {
            Self::Fill(id) | Self::Edit(id) | Self::Responses(id) => Some(id.as_str()),
            Self::List | Self::NewForm => None,
        }
    }
}

/// Public link to the fill-in page of a form
pub fn share_link(base_url: &str, form_id: &str) -> String {
    format!(
        "{}{}",
        base_url.trim_end_matches('/'),
        Route::Fill(form_id.to_string()).path()
    )
}
