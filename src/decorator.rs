// Decorator: coffee add-ons stacked around a base drink.

use crate::dispatch::Capability;

// ============================================================================
// Component
// ============================================================================

pub trait Coffee {
    /// Total price; decorators saturate at `u32::MAX` instead of overflowing.
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

impl Capability for dyn Coffee {
    type Input = ();
    type Output = (u32, String);

    fn invoke(&self, _input: ()) -> (u32, String) {
        (self.cost(), self.description())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Espresso;

impl Coffee for Espresso {
    fn cost(&self) -> u32 {
        50
    }

    fn description(&self) -> String {
        "Espresso".to_string()
    }
}

// ============================================================================
// Decorators (trait objects)
// ============================================================================

pub struct Milk {
    wrapped: Box<dyn Coffee>,
}

impl Milk {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for Milk {
    fn cost(&self) -> u32 {
        self.wrapped.cost().saturating_add(10)
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.wrapped.description())
    }
}

pub struct Sugar {
    wrapped: Box<dyn Coffee>,
}

impl Sugar {
    pub fn new(wrapped: Box<dyn Coffee>) -> Self {
        Self { wrapped }
    }
}

impl Coffee for Sugar {
    fn cost(&self) -> u32 {
        self.wrapped.cost().saturating_add(5)
    }

    fn description(&self) -> String {
        format!("{}, Sugar", self.wrapped.description())
    }
}

// ============================================================================
// Type-safe decorator with generics
// ============================================================================

/// Compile-time add-on: composes over any concrete `Coffee` without boxing.
pub struct Topping<C> {
    inner: C,
    label: &'static str,
    price: u32,
}

impl<C: Coffee> Topping<C> {
    pub fn new(inner: C, label: &'static str, price: u32) -> Self {
        Self {
            inner,
            label,
            price,
        }
    }
}

impl<C: Coffee> Coffee for Topping<C> {
    fn cost(&self) -> u32 {
        self.inner.cost().saturating_add(self.price)
    }

    fn description(&self) -> String {
        format!("{}, {}", self.inner.description(), self.label)
    }
}

// ============================================================================
// Demo
// ============================================================================

fn print_order(coffee: &dyn Coffee) {
    println!("{} -> {}", coffee.description(), coffee.cost());
}

pub fn demo() {
    let mut coffee: Box<dyn Coffee> = Box::new(Espresso);
    print_order(coffee.as_ref());

    coffee = Box::new(Milk::new(coffee));
    print_order(coffee.as_ref());

    coffee = Box::new(Sugar::new(coffee));
    print_order(coffee.as_ref());

    let generic = Topping::new(Topping::new(Espresso, "Caramel", 15), "Cream", 8);
    println!(
        "Generic decorator: {} -> {}",
        generic.description(),
        generic.cost()
    );
}
