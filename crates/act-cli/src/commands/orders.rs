//! Orders command implementation.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;

use act_core::models::{Order, OrderSide};

use crate::output;
use crate::session;

#[derive(Args, Debug)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: OrdersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrdersSubcommand {
    /// List existing orders
    List,

    /// Place a new order
    Place(PlaceArgs),
}

#[derive(Args, Debug)]
pub struct PlaceArgs {
    /// Order side
    #[arg(long, value_enum)]
    pub side: Side,

    /// Number of units
    #[arg(long)]
    pub amount: i64,

    /// Portfolio the order applies to
    #[arg(long)]
    pub portfolio: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Side {
    Buy,
    Sell,
}

impl From<Side> for OrderSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Buy => OrderSide::Buy,
            Side::Sell => OrderSide::Sell,
        }
    }
}

pub async fn run(api: &str, args: OrdersArgs) -> Result<()> {
    let client = session::open_session(api)?;

    match args.command {
        OrdersSubcommand::List => {
            let orders = client.orders().await.context("Failed to fetch orders")?;
            if orders.is_empty() {
                println!("{}", "No orders.".dimmed());
                return Ok(());
            }
            for order in &orders {
                println!(
                    "{:<4} {:>6}  portfolio {}",
                    order.order_type.to_string().bold(),
                    order.amount,
                    order.portfolio_id.dimmed()
                );
            }
        }
        OrdersSubcommand::Place(place) => {
            let order = Order {
                id: None,
                order_type: place.side.into(),
                amount: place.amount,
                portfolio_id: place.portfolio,
            };
            let created = client
                .place_order(&order)
                .await
                .context("Failed to place order")?;
            output::success("Order placed");
            output::field("Order id", &created.order_id);
        }
    }

    Ok(())
}
