//! Result renderer port. Turns a render directive into something displayable.

use tokamak_console_domain::resource::Resource;

use crate::controller::RenderDirective;
use crate::views::ListView;

/// Produces a view for one list page.
///
/// Implementations must accept zero, one or many items in
/// [`RenderDirective::ShowList`]; deciding between the empty state and an
/// empty table is the controller's job, not the renderer's.
pub trait ListRenderer {
    /// What a rendered page is (an HTML string, a terminal frame, …).
    type Output;

    /// Render `directive` using the labels of `view`.
    fn render<R: Resource>(&self, view: &ListView, directive: &RenderDirective<R>)
    -> Self::Output;
}
