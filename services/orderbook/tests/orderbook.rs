//! End-to-end orderbook scenarios
//!
//! Exercises the submission, matching, query, and expiration paths through
//! the public API only.

use orderbook::{OrderBook, OrderBookConfig};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use types::errors::OrderError;
use types::numeric::{Price, Quantity};
use types::order::{OrderStatus, PriceMode, Side};

fn default_book() -> OrderBook {
    OrderBook::new(OrderBookConfig::default())
}

#[test]
fn symmetric_cross_completes_both_orders() {
    let book = default_book();

    let buy_id = book.process_limit_order(Side::Buy, 100, 10).unwrap();
    let sell_id = book.process_limit_order(Side::Sell, 100, 10).unwrap();

    assert_eq!(book.side_queue_len(Side::Buy), 0);
    assert_eq!(book.side_queue_len(Side::Sell), 0);

    let done = book.get_completed_orders();
    assert_eq!(done.len(), 2);
    assert_eq!(done[&buy_id].qty, Quantity::new(10));
    assert_eq!(done[&sell_id].qty, Quantity::new(10));

    let (status, _) = book.get_order(&sell_id);
    assert_eq!(status, OrderStatus::Completed);
}

#[test]
fn market_order_lifecycle() {
    let book = default_book();

    // a completed limit pair first
    book.process_limit_order(Side::Buy, 100, 10).unwrap();
    let sell_id = book.process_limit_order(Side::Sell, 100, 10).unwrap();
    let (status, _) = book.get_order(&sell_id);
    assert_eq!(status, OrderStatus::Completed);

    // market buy with nothing to cross rests as pending
    let market_id = book.process_market_order(Side::Buy, 10).unwrap();
    let (status, order) = book.get_order(&market_id);
    assert_eq!(status, OrderStatus::Pending);
    assert_eq!(order.unwrap().price_mode, PriceMode::Market);

    // two market sells consume it
    book.process_market_order(Side::Sell, 5).unwrap();
    book.process_market_order(Side::Sell, 5).unwrap();

    let (status, order) = book.get_order(&market_id);
    assert_eq!(status, OrderStatus::Completed);
    assert_eq!(order.unwrap().qty, Quantity::new(10));

    assert_eq!(book.get_completed_orders().len(), 5);
}

#[test]
fn partial_fills_accumulate_in_completion_record() {
    struct Case {
        orders: Vec<(Side, PriceMode, i64, i64)>,
        want_qty: i64,
    }

    let cases = [
        // a resting buy consumed one lot at a time
        Case {
            orders: vec![
                (Side::Buy, PriceMode::Limit, 100, 10),
                (Side::Sell, PriceMode::Limit, 100, 1),
                (Side::Sell, PriceMode::Limit, 101, 1),
            ],
            want_qty: 1,
        },
        // a resting sell consumed by two compatible buys
        Case {
            orders: vec![
                (Side::Sell, PriceMode::Limit, 100, 10),
                (Side::Buy, PriceMode::Limit, 100, 1),
                (Side::Buy, PriceMode::Limit, 101, 1),
            ],
            want_qty: 2,
        },
        // a resting market buy follows every counterparty price
        Case {
            orders: vec![
                (Side::Buy, PriceMode::Market, 1, 10),
                (Side::Sell, PriceMode::Limit, 100, 1),
                (Side::Sell, PriceMode::Limit, 101, 1),
                (Side::Sell, PriceMode::Limit, 200, 8),
            ],
            want_qty: 10,
        },
        // a resting market sell partially consumed three times
        Case {
            orders: vec![
                (Side::Sell, PriceMode::Market, 1, 10),
                (Side::Buy, PriceMode::Limit, 10, 2),
                (Side::Buy, PriceMode::Limit, 1000, 1),
                (Side::Buy, PriceMode::Limit, 299, 6),
            ],
            want_qty: 9,
        },
    ];

    for (i, case) in cases.iter().enumerate() {
        let book = default_book();
        let mut target = None;

        for (side, mode, price, qty) in &case.orders {
            let id = match mode {
                PriceMode::Limit => book.process_limit_order(*side, *price, *qty).unwrap(),
                PriceMode::Market => book.process_market_order(*side, *qty).unwrap(),
                PriceMode::Unknown => unreachable!(),
            };
            target.get_or_insert(id);
        }

        let record = book.get_completed_order(&target.unwrap()).unwrap();
        assert_eq!(
            record.qty,
            Quantity::new(case.want_qty),
            "case {i}: wrong accumulated quantity"
        );
    }
}

#[test]
fn saturated_queue_rejects_next_submission() {
    let book = default_book();
    let max = book.config().max_queue_size;

    for _ in 0..max {
        book.process_limit_order(Side::Buy, 100, 10).unwrap();
    }
    assert_eq!(book.side_queue_len(Side::Buy), max);
    assert_eq!(
        book.process_limit_order(Side::Buy, 100, 10),
        Err(OrderError::TooLargeSizeOfQueue)
    );

    // asks are above every bid, so they rest and saturate their own side
    for _ in 0..max {
        book.process_limit_order(Side::Sell, 101, 10).unwrap();
    }
    assert_eq!(
        book.process_limit_order(Side::Sell, 101, 10),
        Err(OrderError::TooLargeSizeOfQueue)
    );
}

#[test]
fn full_cross_of_saturated_sides_fills_everything() {
    let book = default_book();
    let max = book.config().max_queue_size;

    for _ in 0..max {
        book.process_limit_order(Side::Buy, 100, 10).unwrap();
    }
    for _ in 0..max {
        book.process_limit_order(Side::Sell, 100, 10).unwrap();
    }

    assert_eq!(book.side_queue_len(Side::Buy), 0);
    assert_eq!(book.side_queue_len(Side::Sell), 0);
    assert_eq!(book.get_completed_orders().len(), 2 * max);
}

#[tokio::test]
async fn reaper_expires_resting_and_completed_orders() {
    let config = OrderBookConfig::default()
        .with_order_expiration(Duration::from_millis(100))
        .with_clean_frequency(Duration::from_millis(1));
    let book = Arc::new(OrderBook::new(config));

    book.process_limit_order(Side::Buy, 100, 10).unwrap();
    book.process_limit_order(Side::Sell, 120, 10).unwrap();
    assert_eq!(book.side_queue_len(Side::Buy), 1);
    assert_eq!(book.side_queue_len(Side::Sell), 1);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper = tokio::spawn(orderbook::auto_clean(book.clone(), shutdown_rx));

    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(book.side_queue_len(Side::Buy), 0);
    assert_eq!(book.side_queue_len(Side::Sell), 0);
    assert!(book.get_completed_orders().is_empty());

    shutdown_tx.send(true).unwrap();
    reaper.await.unwrap();
}

#[test]
fn market_against_market_fills_at_placeholder_price() {
    let book = default_book();

    let sell_id = book.process_market_order(Side::Sell, 10).unwrap();
    book.process_market_order(Side::Buy, 5).unwrap();

    // no real price ever entered the book, so the placeholder 1 sticks
    let record = book.get_completed_order(&sell_id).unwrap();
    assert_eq!(record.price, Price::new(1));
    assert_eq!(record.qty, Quantity::new(5));
}

#[test]
fn limit_after_market_rewrites_recorded_price() {
    let book = default_book();

    let sell_id = book.process_market_order(Side::Sell, 10).unwrap();
    book.process_market_order(Side::Buy, 5).unwrap();

    book.process_limit_order(Side::Buy, 100, 5).unwrap();

    let record = book.get_completed_order(&sell_id).unwrap();
    assert_eq!(record.price, Price::new(100));
    assert_eq!(record.qty, Quantity::new(10));
}

#[test]
fn residual_of_one_keeps_resting() {
    let book = default_book();

    let buy_id = book.process_limit_order(Side::Buy, 100, 10).unwrap();
    let sell_id = book.process_limit_order(Side::Sell, 100, 9).unwrap();

    let bids = book.bids();
    assert_eq!(bids.len(), 1);
    assert_eq!(bids[0].qty, Quantity::new(1));

    // every submitted unit is accounted for
    let done = book.get_completed_orders();
    assert_eq!(done[&buy_id].qty, Quantity::new(9));
    assert_eq!(done[&sell_id].qty, Quantity::new(9));
    let total: i64 = bids[0].qty.as_i64() + done.values().map(|o| o.qty.as_i64()).sum::<i64>();
    assert_eq!(total, 10 + 9);
}

#[test]
fn quantity_is_conserved_across_random_equal_lot_flow() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let book = OrderBook::new(OrderBookConfig::default().with_max_queue_size(1_000));

    const LOT: i64 = 10;
    let mut submitted = 0i64;

    for _ in 0..500 {
        let side = if rng.gen_bool(0.5) { Side::Buy } else { Side::Sell };
        let result = if rng.gen_bool(0.2) {
            book.process_market_order(side, LOT)
        } else {
            book.process_limit_order(side, rng.gen_range(1..=10), LOT)
        };
        result.unwrap();
        submitted += LOT;

        let resting: i64 = book
            .bids()
            .iter()
            .chain(book.asks().iter())
            .map(|o| o.qty.as_i64())
            .sum();
        let completed: i64 = book
            .get_completed_orders()
            .values()
            .map(|o| o.qty.as_i64())
            .sum();
        assert_eq!(resting + completed, submitted, "quantity leaked or duplicated");
    }
}

#[test]
fn top_of_book_is_best_priced_oldest_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    // buys only: nothing crosses, so the queue keeps every submission
    let book = OrderBook::new(OrderBookConfig::default().with_max_queue_size(1_000));
    let mut best = 0;
    for _ in 0..200 {
        let price = rng.gen_range(1..=50);
        book.process_limit_order(Side::Buy, price, 1).unwrap();
        best = best.max(price);
        assert_eq!(book.bids()[0].price.as_i64(), best);
    }

    // sells only: lowest price surfaces
    let book = OrderBook::new(OrderBookConfig::default().with_max_queue_size(1_000));
    let mut best = i64::MAX;
    for _ in 0..200 {
        let price = rng.gen_range(1..=50);
        book.process_limit_order(Side::Sell, price, 1).unwrap();
        best = best.min(price);
        assert_eq!(book.asks()[0].price.as_i64(), best);
    }

    // equal prices: the earliest submission stays on top
    let book = default_book();
    let first = book.process_limit_order(Side::Buy, 10, 1).unwrap();
    std::thread::sleep(Duration::from_millis(2));
    book.process_limit_order(Side::Buy, 10, 1).unwrap();
    std::thread::sleep(Duration::from_millis(2));
    book.process_limit_order(Side::Buy, 10, 1).unwrap();
    assert_eq!(book.bids()[0].id, first);
}
