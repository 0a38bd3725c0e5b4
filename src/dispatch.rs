//! Capability dispatch shared by the factory, adapter, decorator and command
//! examples.
//!
//! Each of those patterns declares its own contract trait. `Capability` is the
//! common shape behind them: one input, one output, and a target that was
//! chosen when the call was constructed. [`invoke`] drives any of them without
//! knowing the concrete variant behind the trait object.

pub trait Capability {
    type Input;
    type Output;

    fn invoke(&self, input: Self::Input) -> Self::Output;
}

pub fn invoke<C>(target: &C, input: C::Input) -> C::Output
where
    C: Capability + ?Sized,
{
    target.invoke(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{PayPalAdapter, PayPalService, PaymentProcessor};
    use crate::command::{Command, Light, LightOnCommand};
    use crate::decorator::{Coffee, Espresso, Milk};
    use crate::factory::VehicleFactory;
    use std::rc::Rc;

    #[test]
    fn test_invoke_vehicle() {
        let vehicle = VehicleFactory::create("bike").unwrap();
        assert_eq!(invoke(vehicle.as_ref(), ()), vehicle.drive());
    }

    #[test]
    fn test_invoke_payment() {
        let processor: Box<dyn PaymentProcessor> =
            Box::new(PayPalAdapter::new(PayPalService::default()));
        let receipt = invoke(processor.as_ref(), 42.5);
        assert_eq!(receipt.amount, 42.5);
    }

    #[test]
    fn test_invoke_coffee() {
        let coffee: Box<dyn Coffee> = Box::new(Milk::new(Box::new(Espresso)));
        assert_eq!(invoke(coffee.as_ref(), ()), (60, "Espresso, Milk".to_string()));
    }

    #[test]
    fn test_invoke_command() {
        let light = Rc::new(Light::new("Hall"));
        let command: Box<dyn Command> = Box::new(LightOnCommand::new(Rc::clone(&light)));

        invoke(command.as_ref(), ());
        assert!(light.is_on());
    }
}
