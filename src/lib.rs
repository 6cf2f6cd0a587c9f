//! `poker_equity` works out how often a Texas holdem hand wins.
//!
//! Hands are ranked with a perfect hash lookup table in the
//! `HandRanks.dat` layout: each card is one array lookup, so a seven card
//! hand is seven reads. The table can be loaded from disk or generated with
//! [`table::TableBuilder`].
//!
//! On top of that sit heads up equity (exact enumeration or monte carlo,
//! optionally spread across threads), starting hand classes like `AKs`,
//! hole card probabilities, and a weighted lottery for picking outcomes.
//!
//! ```
//! use std::sync::Arc;
//!
//! use poker_equity::core::{parse_cards, Hand};
//! use poker_equity::table::TableBuilder;
//!
//! // Restricting the table to the cards in play keeps the example fast.
//! let hole = Hand::new_from_str("AhAd").unwrap();
//! let board = parse_cards("AcKdQh2s3c").unwrap();
//! let villain = parse_cards("KsKh").unwrap();
//! let mut cards = board.clone();
//! cards.extend(hole.cards());
//! cards.extend(&villain);
//! let table = Arc::new(TableBuilder::with_cards(cards).build());
//!
//! let hands = vec![hole, Hand::new(villain[0], villain[1]).unwrap()];
//! let shares = poker_equity::holdem::compare_hands(&table, &board, &hands).unwrap();
//! assert_eq!(vec![1.0, 0.0], shares);
//! ```
//!
//! Equity needs a table covering the whole deck:
//!
//! ```no_run
//! use poker_equity::config::EquityConfig;
//! use poker_equity::core::{parse_cards, Hand};
//! use poker_equity::holdem::EquityCalculator;
//!
//! let config = EquityConfig::from_env().unwrap();
//! let calc = EquityCalculator::new(config.install_table().unwrap());
//! let hole = Hand::new_from_str("AhKh").unwrap();
//! let board = parse_cards("Ks7d2c").unwrap();
//! let equity = calc
//!     .simulate_parallel(&hole, &board, config.trials, config.workers)
//!     .unwrap();
//! println!("{:.3}", equity);
//! ```

/// Cards, decks, hands, rank values and the error type. Nothing in core
/// knows about the rank table.
pub mod core;
/// The rank table: loading, traversal, and generation.
pub mod table;
/// Holdem specific code: hand classes, showdowns, and equity.
pub mod holdem;
/// Weighted random draws.
pub mod lottery;
/// Settings read from the environment.
pub mod config;
