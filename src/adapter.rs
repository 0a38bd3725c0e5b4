// Adapter: put third-party payment services behind one payment contract.

use crate::dispatch::Capability;
use std::cell::Cell;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Receipt {
    pub provider: &'static str,
    pub amount: f64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} processed {:.2}", self.provider, self.amount)
    }
}

// ============================================================================
// Target interface
// ============================================================================

pub trait PaymentProcessor {
    fn make_payment(&self, amount: f64) -> Receipt;
}

impl Capability for dyn PaymentProcessor {
    type Input = f64;
    type Output = Receipt;

    fn invoke(&self, amount: f64) -> Receipt {
        self.make_payment(amount)
    }
}

// ============================================================================
// Existing services with their own interfaces
// ============================================================================

/// PayPal-style service; remembers the last amount it was asked to send.
#[derive(Debug, Default)]
pub struct PayPalService {
    last_sent: Cell<Option<f64>>,
}

impl PayPalService {
    pub fn send_payment(&self, amount: f64) -> Receipt {
        self.last_sent.set(Some(amount));
        Receipt {
            provider: "PayPal",
            amount,
        }
    }

    pub fn last_sent(&self) -> Option<f64> {
        self.last_sent.get()
    }
}

#[derive(Debug, Default)]
pub struct StripeService {
    last_charged: Cell<Option<f64>>,
}

impl StripeService {
    pub fn charge(&self, amount: f64) -> Receipt {
        self.last_charged.set(Some(amount));
        Receipt {
            provider: "Stripe",
            amount,
        }
    }

    pub fn last_charged(&self) -> Option<f64> {
        self.last_charged.get()
    }
}

// ============================================================================
// Adapters
// ============================================================================

pub struct PayPalAdapter {
    service: PayPalService,
}

impl PayPalAdapter {
    pub fn new(service: PayPalService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &PayPalService {
        &self.service
    }
}

impl PaymentProcessor for PayPalAdapter {
    fn make_payment(&self, amount: f64) -> Receipt {
        debug!(amount, "delegating to PayPal send_payment");
        self.service.send_payment(amount)
    }
}

pub struct StripeAdapter {
    service: StripeService,
}

impl StripeAdapter {
    pub fn new(service: StripeService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &StripeService {
        &self.service
    }
}

impl PaymentProcessor for StripeAdapter {
    fn make_payment(&self, amount: f64) -> Receipt {
        debug!(amount, "delegating to Stripe charge");
        self.service.charge(amount)
    }
}

// ============================================================================
// Zero-cost adapter with generics
// ============================================================================

pub trait Charge {
    fn charge_native(&self, amount: f64) -> Receipt;
}

impl Charge for PayPalService {
    fn charge_native(&self, amount: f64) -> Receipt {
        self.send_payment(amount)
    }
}

impl Charge for StripeService {
    fn charge_native(&self, amount: f64) -> Receipt {
        self.charge(amount)
    }
}

pub struct ServiceAdapter<S> {
    inner: S,
}

impl<S: Charge> ServiceAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Charge> PaymentProcessor for ServiceAdapter<S> {
    fn make_payment(&self, amount: f64) -> Receipt {
        self.inner.charge_native(amount)
    }
}

// ============================================================================
// Demo
// ============================================================================

fn checkout(processor: &dyn PaymentProcessor, amount: f64) -> Receipt {
    processor.make_payment(amount)
}

pub fn demo() {
    let processors: Vec<Box<dyn PaymentProcessor>> = vec![
        Box::new(PayPalAdapter::new(PayPalService::default())),
        Box::new(StripeAdapter::new(StripeService::default())),
    ];

    for processor in &processors {
        println!("{}", checkout(processor.as_ref(), 100.0));
    }

    let generic = ServiceAdapter::new(StripeService::default());
    println!("Generic adapter: {}", generic.make_payment(19.99));
}
