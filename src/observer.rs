// Observer: a stock ticker broadcasting price changes to its subscribers.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

pub trait PriceObserver {
    fn on_update(&self, price: f64);
}

// ============================================================================
// Subject
// ============================================================================

pub struct Stock {
    symbol: String,
    price: f64,
    observers: Vec<Rc<dyn PriceObserver>>,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            observers: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends `observer`. Subscribing the same handle twice means it is
    /// notified twice per update.
    pub fn subscribe(&mut self, observer: Rc<dyn PriceObserver>) {
        self.observers.push(observer);
    }

    /// Removes every occurrence of `observer` (compared by handle). O(n).
    pub fn unsubscribe(&mut self, observer: &Rc<dyn PriceObserver>) {
        let before = self.observers.len();
        self.observers.retain(|o| !Rc::ptr_eq(o, observer));
        trace!(removed = before - self.observers.len(), "unsubscribed");
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.notify();
    }

    fn notify(&self) {
        debug!(
            symbol = %self.symbol,
            price = self.price,
            subscribers = self.observers.len(),
            "broadcasting price"
        );
        for observer in &self.observers {
            observer.on_update(self.price);
        }
    }
}

// ============================================================================
// Observers
// ============================================================================

pub struct PriceDisplay {
    name: String,
}

impl PriceDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PriceObserver for PriceDisplay {
    fn on_update(&self, price: f64) {
        println!("{} display: price is now {:.2}", self.name, price);
    }
}

/// Keeps every price it was notified about.
#[derive(Default)]
pub struct PriceRecorder {
    received: RefCell<Vec<f64>>,
}

impl PriceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<f64> {
        self.received.borrow().clone()
    }
}

impl PriceObserver for PriceRecorder {
    fn on_update(&self, price: f64) {
        self.received.borrow_mut().push(price);
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn demo() {
    let mut stock = Stock::new("ACME", 100.0);

    let mobile: Rc<dyn PriceObserver> = Rc::new(PriceDisplay::new("Mobile"));
    let web: Rc<dyn PriceObserver> = Rc::new(PriceDisplay::new("Web"));
    let recorder = Rc::new(PriceRecorder::new());

    stock.subscribe(Rc::clone(&mobile));
    stock.subscribe(Rc::clone(&web));
    stock.subscribe(recorder.clone());

    println!("{} -> 105", stock.symbol());
    stock.set_price(105.0);

    stock.unsubscribe(&web);
    println!("{} -> 110 (Web unsubscribed)", stock.symbol());
    stock.set_price(110.0);

    println!("Recorded history: {:?}", recorder.received());
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes "<name>:<price>" into a log shared by all probes of a test.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl PriceObserver for Probe {
        fn on_update(&self, price: f64) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, price));
        }
    }

    fn probe(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Rc<dyn PriceObserver> {
        Rc::new(Probe {
            name,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_broadcast_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut stock = Stock::new("ACME", 100.0);
        stock.subscribe(probe("first", &log));
        stock.subscribe(probe("second", &log));

        stock.set_price(105.0);

        assert_eq!(stock.price(), 105.0);
        assert_eq!(*log.borrow(), vec!["first:105", "second:105"]);
    }

    #[test]
    fn test_unsubscribed_observer_not_notified() {
        let mut stock = Stock::new("ACME", 100.0);
        let kept = Rc::new(PriceRecorder::new());
        let dropped = Rc::new(PriceRecorder::new());
        let dropped_handle: Rc<dyn PriceObserver> = dropped.clone();

        stock.subscribe(kept.clone());
        stock.subscribe(Rc::clone(&dropped_handle));
        stock.set_price(105.0);

        stock.unsubscribe(&dropped_handle);
        stock.set_price(110.0);

        assert_eq!(kept.received(), vec![105.0, 110.0]);
        assert_eq!(dropped.received(), vec![105.0]);
    }

    #[test]
    fn test_duplicates_notified_and_removed_together() {
        let mut stock = Stock::new("ACME", 1.0);
        let recorder = Rc::new(PriceRecorder::new());
        let handle: Rc<dyn PriceObserver> = recorder.clone();

        stock.subscribe(Rc::clone(&handle));
        stock.subscribe(Rc::clone(&handle));
        stock.set_price(2.0);
        assert_eq!(recorder.received(), vec![2.0, 2.0]);

        stock.unsubscribe(&handle);
        assert_eq!(stock.subscriber_count(), 0);

        stock.set_price(3.0);
        assert_eq!(recorder.received(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let mut stock = Stock::new("ACME", 1.0);
        let subscribed: Rc<dyn PriceObserver> = Rc::new(PriceRecorder::new());
        let stranger: Rc<dyn PriceObserver> = Rc::new(PriceRecorder::new());

        stock.subscribe(subscribed);
        stock.unsubscribe(&stranger);
        assert_eq!(stock.subscriber_count(), 1);
    }

    #[test]
    fn test_set_price_without_subscribers() {
        let mut stock = Stock::new("ACME", 1.0);
        stock.set_price(4.5);
        assert_eq!(stock.price(), 4.5);
    }
}
