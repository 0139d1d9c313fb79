//! Demo host: replays card presses against a catalog and prints the surface.

use anyhow::Result;
use clap::Parser;

use shopcart_core::ProductId;
use shopcart_products::Catalog;
use shopcart_widget::{CardAction, CartWidget, TextPresenter, WidgetConfig};

#[derive(Parser, Debug)]
#[command(name = "shopcart-demo")]
#[command(about = "Replay product card presses against the cart widget")]
#[command(version)]
struct Args {
    /// Card presses in order: `+<id>` (increment), `-<id>` (decrement), `x<id>` (delete)
    #[arg(value_name = "PRESS", allow_hyphen_values = true, value_parser = parse_press)]
    presses: Vec<(ProductId, CardAction)>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = WidgetConfig::from_env()?;
    shopcart_observability::init_with(config.log_format);

    let catalog = match config.load_catalog()? {
        Some(catalog) => catalog,
        None => sample_catalog()?,
    };
    tracing::info!(products = catalog.len(), currency = %config.currency, "widget starting");

    let mut widget = CartWidget::new(&catalog, TextPresenter::new(config.currency.clone()));
    widget.refresh()?;
    println!("{}", widget.presenter().surface());

    for (product_id, action) in args.presses {
        if widget.press(product_id, action)? {
            println!("\n{}", widget.presenter().surface());
        }
    }

    Ok(())
}

fn sample_catalog() -> Result<Catalog> {
    let catalog = Catalog::from_cards([
        ("Attiéké poisson", "2500 FCFA"),
        ("Alloco", "1000 FCFA"),
        ("Garba", "1500 FCFA"),
    ])?;
    Ok(catalog)
}

fn parse_press(arg: &str) -> Result<(ProductId, CardAction), String> {
    let mut chars = arg.chars();
    let action = match chars.next() {
        Some('+') => CardAction::Increment,
        Some('-') => CardAction::Decrement,
        Some('x') | Some('X') => CardAction::Delete,
        _ => return Err("expected +, - or x followed by a product id".to_string()),
    };
    let product_id = chars
        .as_str()
        .parse::<ProductId>()
        .map_err(|e| e.to_string())?;
    Ok((product_id, action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_presses() {
        assert_eq!(
            parse_press("+2").unwrap(),
            (ProductId::new(2), CardAction::Increment)
        );
        assert_eq!(
            parse_press("-1").unwrap(),
            (ProductId::new(1), CardAction::Decrement)
        );
        assert_eq!(
            parse_press("x3").unwrap(),
            (ProductId::new(3), CardAction::Delete)
        );
        assert!(parse_press("?1").is_err());
        assert!(parse_press("+").is_err());
    }

    #[test]
    fn command_line_collects_presses_in_order() {
        let args = Args::try_parse_from(["shopcart-demo", "+1", "-2", "x3"]).unwrap();
        assert_eq!(
            args.presses,
            vec![
                (ProductId::new(1), CardAction::Increment),
                (ProductId::new(2), CardAction::Decrement),
                (ProductId::new(3), CardAction::Delete),
            ]
        );

        let none = Args::try_parse_from(["shopcart-demo"]).unwrap();
        assert!(none.presses.is_empty());
    }

    #[test]
    fn command_line_rejects_malformed_press() {
        let err = Args::try_parse_from(["shopcart-demo", "+1", "?1"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn sample_catalog_loads() {
        assert_eq!(sample_catalog().unwrap().len(), 3);
    }
}
