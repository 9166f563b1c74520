//! Crossing logic
//!
//! Pops the best counterparty order off the opposite-side queue and crosses
//! it against the incoming order until the incoming order is exhausted or no
//! further crossing is possible.

use crate::order::Order;
use crate::queue::OrderQueue;
use types::numeric::{Price, Quantity};
use types::order::{PriceMode, Side};

/// Check if the incoming order can cross a resting order at these prices
///
/// A buy accepts any resting price at or below its own; a sell accepts any
/// resting price at or above its own. Equal prices always match.
pub fn compatible(incoming_side: Side, resting_price: Price, incoming_price: Price) -> bool {
    if resting_price == incoming_price {
        return true;
    }
    match incoming_side {
        Side::Buy => resting_price < incoming_price,
        Side::Sell => resting_price > incoming_price,
    }
}

/// Cross `incoming` against the counterparty queue
///
/// Consumes quantity from both sides. Returns one completion record per
/// resting order that lost quantity, carrying the portion filled in this
/// crossing and the price it filled at. Residual resting quantity is pushed
/// back; resting orders with an incompatible price are set aside and
/// re-pushed once the loop ends, so they cannot be popped twice.
///
/// Market price resolution: an incoming market order inherits the resting
/// price; a resting market order inherits the incoming price. A resting
/// market order keeps its market mode, so its price follows every
/// counterparty it crosses.
pub(crate) fn cross(counterparty: &mut OrderQueue, incoming: &mut Order) -> Vec<Order> {
    let mut fills = Vec::new();
    let mut skipped = Vec::new();

    while !incoming.qty.is_zero() {
        let Some(mut resting) = counterparty.pop() else {
            break;
        };
        let resting_qty_before = resting.qty;

        if incoming.price_mode == PriceMode::Market {
            incoming.price = resting.price;
        }
        if resting.price_mode == PriceMode::Market {
            resting.price = incoming.price;
        }

        if compatible(incoming.side, resting.price, incoming.price) {
            if resting.qty == incoming.qty {
                resting.qty = Quantity::ZERO;
                incoming.qty = Quantity::ZERO;
            } else if resting.qty > incoming.qty {
                resting.qty = resting.qty - incoming.qty;
                incoming.qty = Quantity::ZERO;
            } else {
                incoming.qty = incoming.qty - resting.qty;
                resting.qty = Quantity::ZERO;
            }

            // the completion record is a detached copy carrying only the
            // portion filled in this crossing
            if resting_qty_before != resting.qty {
                let mut fill = resting.clone();
                fill.qty = resting_qty_before - resting.qty;
                fills.push(fill);
            }

            if !resting.qty.is_zero() {
                counterparty.push(resting);
            }
        } else {
            skipped.push(resting);
        }
    }

    for order in skipped {
        counterparty.push(order);
    }

    fills
}
