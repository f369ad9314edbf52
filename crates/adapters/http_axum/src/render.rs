//! HTML rendering of list views.
//!
//! Each directive maps to one askama page (`templates/*.html`) extending the
//! shared `base.html` layout. Escaping is left to the template engine.

use askama::Template;

use tokamak_console_app::controller::RenderDirective;
use tokamak_console_app::ports::ListRenderer;
use tokamak_console_app::views::ListView;
use tokamak_console_domain::envelope::ErrorInfo;
use tokamak_console_domain::resource::{Resource, ResourceKind};
use tokamak_console_domain::time;

/// Presentation context shared by every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Value of the `data-theme` attribute on `<html>`.
    pub name: String,
    /// Product name shown in the header and page titles.
    pub brand: String,
    /// Interval of the loader's auto-refresh.
    pub refresh_seconds: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "light".to_string(),
            brand: "Tokamak".to_string(),
            refresh_seconds: 1,
        }
    }
}

/// Fields `base.html` reads from every page.
pub(crate) struct Layout<'a> {
    pub(crate) theme: &'a Theme,
    pub(crate) title: &'a str,
    pub(crate) refresh: bool,
    pub(crate) nav: Vec<NavLink>,
}

pub(crate) struct NavLink {
    pub(crate) href: String,
    pub(crate) title: &'static str,
    pub(crate) current: bool,
}

/// One table row, already formatted for display.
struct Row<'a> {
    name: &'a str,
    description: &'a str,
    id: &'a str,
    updated: String,
}

#[derive(Template)]
#[template(path = "loader.html")]
struct LoaderPage<'a> {
    layout: Layout<'a>,
    view: &'a ListView,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    layout: Layout<'a>,
    view: &'a ListView,
    code: Option<&'a str>,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "empty.html")]
struct EmptyPage<'a> {
    layout: Layout<'a>,
    view: &'a ListView,
}

#[derive(Template)]
#[template(path = "list.html")]
struct ListPage<'a> {
    layout: Layout<'a>,
    view: &'a ListView,
    rows: Vec<Row<'a>>,
}

/// Renders directives into complete HTML documents.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    theme: Theme,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Layout context for a page titled `title`.
    ///
    /// `active` highlights one navigation entry; `refresh` adds the
    /// auto-reload meta tag.
    pub(crate) fn layout<'a>(
        &'a self,
        title: &'a str,
        active: Option<ResourceKind>,
        refresh: bool,
    ) -> Layout<'a> {
        let nav = ResourceKind::ALL
            .into_iter()
            .map(|kind| NavLink {
                href: format!("/{kind}"),
                title: ListView::for_kind(kind).title,
                current: active == Some(kind),
            })
            .collect();
        Layout {
            theme: &self.theme,
            title,
            refresh,
            nav,
        }
    }

    fn rows<R: Resource>(items: &[R]) -> Vec<Row<'_>> {
        items
            .iter()
            .map(|item| Row {
                name: item.name(),
                description: item.description().unwrap_or_default(),
                id: item.id(),
                updated: item.updated().map(time::display).unwrap_or_default(),
            })
            .collect()
    }

    fn error_page<'a>(&'a self, view: &'a ListView, error: &'a ErrorInfo) -> ErrorPage<'a> {
        ErrorPage {
            layout: self.layout(view.title, Some(view.kind), false),
            view,
            code: error.code.as_deref(),
            message: &error.message,
        }
    }
}

impl ListRenderer for HtmlRenderer {
    type Output = askama::Result<String>;

    fn render<R: Resource>(
        &self,
        view: &ListView,
        directive: &RenderDirective<R>,
    ) -> askama::Result<String> {
        match directive {
            RenderDirective::ShowLoader => LoaderPage {
                layout: self.layout(view.title, Some(view.kind), true),
                view,
            }
            .render(),
            RenderDirective::ShowError(error) => self.error_page(view, error).render(),
            RenderDirective::ShowEmpty => EmptyPage {
                layout: self.layout(view.title, Some(view.kind), false),
                view,
            }
            .render(),
            RenderDirective::ShowList(items) => ListPage {
                layout: self.layout(view.title, Some(view.kind), false),
                view,
                rows: Self::rows(items),
            }
            .render(),
        }
    }
}
