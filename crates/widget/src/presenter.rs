//! Presentation adapters: turn a [`CartView`] into something a user sees.

use std::io::Write;

use crate::error::WidgetResult;
use crate::view::CartView;

/// Presentation adapter contract.
///
/// Called by the widget once after every mutation that changed the cart, and
/// on explicit refresh. Implementations only read the view; they never call
/// back into the cart.
pub trait Presenter {
    fn render(&mut self, view: &CartView) -> WidgetResult<()>;
}

impl<P> Presenter for Box<P>
where
    P: Presenter + ?Sized,
{
    fn render(&mut self, view: &CartView) -> WidgetResult<()> {
        (**self).render(view)
    }
}

impl<P> Presenter for &mut P
where
    P: Presenter + ?Sized,
{
    fn render(&mut self, view: &CartView) -> WidgetResult<()> {
        (**self).render(view)
    }
}

/// Format a view as the plain-text cart block.
///
/// ```text
/// cart: shown
/// count: 3
/// A | 3 x 500 FCFA | Total: 1500 FCFA
/// total: 1500 FCFA
/// ```
pub fn render_text(view: &CartView, currency: &str) -> String {
    let mut out = Vec::with_capacity(view.lines.len() + 3);
    out.push(format!(
        "cart: {}",
        if view.visible { "shown" } else { "hidden" }
    ));
    out.push(format!("count: {}", view.total_items));
    for line in &view.lines {
        out.push(format!(
            "{} | {} x {} {currency} | Total: {} {currency}",
            line.name, line.quantity, line.unit_price, line.line_total
        ));
    }
    out.push(format!("total: {} {currency}", view.total_price));
    out.join("\n")
}

/// In-memory text surface. Keeps the last rendered block.
#[derive(Debug, Clone, Default)]
pub struct TextPresenter {
    currency: String,
    surface: String,
    renders: usize,
}

impl TextPresenter {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            surface: String::new(),
            renders: 0,
        }
    }

    /// The last rendered block (empty before the first render).
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// How many times the surface has been refreshed.
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Presenter for TextPresenter {
    fn render(&mut self, view: &CartView) -> WidgetResult<()> {
        self.surface = render_text(view, &self.currency);
        self.renders += 1;
        Ok(())
    }
}

/// Writes each view as one JSON line.
#[derive(Debug)]
pub struct JsonPresenter<W> {
    writer: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn render(&mut self, view: &CartView) -> WidgetResult<()> {
        serde_json::to_writer(&mut self.writer, view)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::LineView;
    use shopcart_core::{Money, ProductId};

    fn sample_view() -> CartView {
        CartView {
            lines: vec![LineView {
                product_id: ProductId::new(1),
                name: "A".to_string(),
                unit_price: Money::new(500),
                quantity: 3,
                line_total: Money::new(1500),
            }],
            total_items: 3,
            total_price: Money::new(1500),
            visible: true,
        }
    }

    #[test]
    fn text_layout() {
        assert_eq!(
            render_text(&sample_view(), "FCFA"),
            "cart: shown\ncount: 3\nA | 3 x 500 FCFA | Total: 1500 FCFA\ntotal: 1500 FCFA"
        );
        assert_eq!(
            render_text(&CartView::default(), "EUR"),
            "cart: hidden\ncount: 0\ntotal: 0 EUR"
        );
    }

    #[test]
    fn text_presenter_keeps_last_surface() {
        let mut presenter = TextPresenter::new("FCFA");
        assert_eq!(presenter.surface(), "");

        presenter.render(&sample_view()).unwrap();
        presenter.render(&CartView::default()).unwrap();

        assert_eq!(presenter.renders(), 2);
        assert!(presenter.surface().starts_with("cart: hidden"));
    }

    #[test]
    fn json_presenter_writes_one_line_per_render() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.render(&sample_view()).unwrap();
        presenter.render(&CartView::default()).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: CartView = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first, sample_view());
        let first_raw: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first_raw["total_price"], 1500);
        assert_eq!(first_raw["lines"][0]["name"], "A");
    }

    #[test]
    fn boxed_presenter_delegates() {
        let mut boxed: Box<dyn Presenter> = Box::new(TextPresenter::new("FCFA"));
        boxed.render(&sample_view()).unwrap();
    }
}
