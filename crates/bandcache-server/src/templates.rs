//! Tera templates for the HTML pages.
//!
//! `index.html` renders both the artist grid and the single-artist view.
//! Error pages are looked up by status code (`404.html`, `500.html`, ...).

use std::path::Path;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::error;

use bandcache_core::{Artist, Concert};

const INDEX_TEMPLATE: &str = "index.html";

/// Templates that must exist for the server to start
const REQUIRED_TEMPLATES: [&str; 5] = ["index.html", "400.html", "404.html", "405.html", "500.html"];

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("Missing template: {0}")]
    Missing(&'static str),
}

/// Context for `index.html`
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub artists: Vec<Artist>,
    pub artist: Option<Artist>,
    /// "4 members", shown on the single-artist view
    pub member_count: Option<String>,
    pub concerts: Vec<Concert>,
    pub is_single_artist: bool,
}

impl IndexPage {
    pub fn list(artists: Vec<Artist>) -> Self {
        Self {
            artists,
            artist: None,
            member_count: None,
            concerts: Vec::new(),
            is_single_artist: false,
        }
    }

    pub fn single(artist: Artist, concerts: Vec<Concert>) -> Self {
        Self {
            artists: Vec::new(),
            member_count: Some(artist.member_count_display()),
            artist: Some(artist),
            concerts,
            is_single_artist: true,
        }
    }
}

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Load every `*.html` under `dir`
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let glob = format!("{}/**/*.html", dir.display());
        Self::from_tera(Tera::new(&glob)?)
    }

    /// Build from in-memory sources
    #[cfg(test)]
    pub fn from_raw(sources: &[(&str, &str)]) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(sources.iter().copied())?;
        Self::from_tera(tera)
    }

    fn from_tera(tera: Tera) -> Result<Self, TemplateError> {
        let names: Vec<&str> = tera.get_template_names().collect();
        if let Some(missing) = REQUIRED_TEMPLATES.iter().copied().find(|name| !names.contains(name)) {
            return Err(TemplateError::Missing(missing));
        }
        Ok(Self { tera })
    }

    pub fn render_index(&self, page: &IndexPage) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }

    /// Render the page for `status`, falling back to plain text if that fails too.
    pub fn error_page(&self, status: StatusCode) -> Response {
        let name = match status {
            StatusCode::BAD_REQUEST => "400.html",
            StatusCode::NOT_FOUND => "404.html",
            StatusCode::METHOD_NOT_ALLOWED => "405.html",
            _ => "500.html",
        };

        let mut context = Context::new();
        context.insert("status_code", &status.as_u16());
        context.insert("reason", status.canonical_reason().unwrap_or("Error"));

        match self.tera.render(name, &context) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                error!(template = name, error = %e, "Failed to render error page");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error rendering error page: {}", e),
                )
                    .into_response()
            }
        }
    }

    /// Render `page`, or the 500 page if rendering fails
    pub fn index_response(&self, page: &IndexPage) -> Response {
        match self.render_index(page) {
            Ok(body) => Html(body).into_response(),
            Err(e) => {
                error!(error = %e, "Template error");
                self.error_page(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
