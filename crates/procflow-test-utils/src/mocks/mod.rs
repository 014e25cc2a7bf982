//! Mock implementations for procflow traits.

use mockall::mock;
use procflow_core::{DefinedInput, ExecutionContext, ProcessHandler};

// Generate the mock implementation for ProcessHandler
mock! {
    pub Handler {}

    impl ProcessHandler for Handler {
        fn handle(&self, context: &mut ExecutionContext, inputs: &[DefinedInput]) -> anyhow::Result<()>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_handler_expectations() {
        let mut mock = MockHandler::new();
        mock.expect_handle()
            .withf(|_, inputs| inputs.len() == 1 && inputs[0].name == "stake_amount")
            .times(1)
            .returning(|context, _| {
                context.insert("calldata", "to mars");
                Ok(())
            });

        let mut context = ExecutionContext::new();
        let inputs = vec![DefinedInput::new("stake_amount", "100000", "string", "bigint")];
        mock.handle(&mut context, &inputs).unwrap();

        assert_eq!(context.get_str("calldata").unwrap(), "to mars");
    }
}
