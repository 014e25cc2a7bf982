use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use procflow_core::{
    require_input, DefinedInput, ErrorKind, ExecutionContext, FlowError, FlowParser, HandlerRegistry, ProcessHandler,
};
use procflow_dsl::{FlowSchema, InputSchema, ProcessSchema};
use serde_json::json;

const STAKE_REQUEST: &str = r#"{
    "name": "Stake",
    "process_definitions": [
        {
            "name": "prepareCallData",
            "defined_input": [
                { "name": "stake_amount", "value": "100000", "type": "string", "metaType": "bigint" }
            ]
        },
        { "name": "processUserOp", "defined_input": [] }
    ]
}"#;

fn stake_schema() -> FlowSchema {
    FlowSchema::new("Stake")
        .process(ProcessSchema::new("prepareCallData").input(InputSchema::new("stake_amount", "string", "bigint")))
        .process(ProcessSchema::new("processUserOp"))
}

fn prepare_call_data(context: &mut ExecutionContext, inputs: &[DefinedInput]) -> anyhow::Result<()> {
    let amount: u128 = require_input(inputs, "stake_amount")?.value_as()?;
    anyhow::ensure!(amount > 0, "stake amount must be positive");
    context.insert("calldata", "to mars");
    Ok(())
}

fn process_user_op(context: &mut ExecutionContext, _inputs: &[DefinedInput]) -> anyhow::Result<()> {
    let calldata = context.get_str("calldata")?.to_string();
    context.insert("response", json!({ "data": calldata }));
    Ok(())
}

fn stake_parser() -> FlowParser {
    let handlers = HandlerRegistry::new()
        .with_fn("prepareCallData", prepare_call_data)
        .with_fn("processUserOp", process_user_op);
    let mut parser = FlowParser::new(handlers);
    parser.add("Stake", stake_schema());
    parser
}

#[test]
fn stake_flow_writes_response() {
    let parser = stake_parser();
    let flow = parser.parse_json(STAKE_REQUEST).unwrap();

    let mut context = ExecutionContext::new();
    flow.run(&mut context).unwrap();

    assert_eq!(context.get_str("calldata").unwrap(), "to mars");
    assert_eq!(context.get("response").unwrap().as_value(), &json!({ "data": "to mars" }));
}

#[test]
fn handler_error_surfaces_as_process_failure() {
    let mut parser = stake_parser();
    parser
        .handlers_mut()
        .register_fn("prepareCallData", |_: &mut ExecutionContext, _: &[DefinedInput]| {
            anyhow::bail!("failed to sign userOp")
        });

    let flow = parser.parse_json(STAKE_REQUEST).unwrap();
    let mut context = ExecutionContext::new();
    let err = flow.run(&mut context).unwrap_err();

    assert_eq!(err.kinds(), vec![ErrorKind::ProcessFailure]);
    match &err {
        FlowError::ProcessFailure { index, process, source } => {
            assert_eq!(*index, 0);
            assert_eq!(process, "prepareCallData");
            assert_eq!(source.to_string(), "failed to sign userOp");
        }
        other => panic!("Expected ProcessFailure, got {:?}", other),
    }
    assert!(!context.contains_key("response"));
}

#[test]
fn bad_input_value_fails_the_run() {
    let parser = stake_parser();
    let request = STAKE_REQUEST.replace("\"100000\"", "\"a lot\"");
    let flow = parser.parse_json(&request).unwrap();

    let err = flow.run(&mut ExecutionContext::new()).unwrap_err();
    assert!(err.is(ErrorKind::ProcessFailure));
    assert!(err.handler_error().unwrap().to_string().contains("a lot"));
}

#[test]
fn one_flow_many_runs() {
    struct Counter(AtomicUsize);

    impl ProcessHandler for Counter {
        fn handle(&self, context: &mut ExecutionContext, _inputs: &[DefinedInput]) -> anyhow::Result<()> {
            let n = self.0.fetch_add(1, Ordering::SeqCst) as i64;
            context.insert("calldata", n);
            Ok(())
        }
    }

    let counter = Arc::new(Counter(AtomicUsize::new(0)));
    let mut parser = stake_parser();
    parser.handlers_mut().register_shared("prepareCallData", counter.clone());
    parser
        .handlers_mut()
        .register_fn("processUserOp", |_: &mut ExecutionContext, _: &[DefinedInput]| Ok(()));

    let flow = parser.parse_json(STAKE_REQUEST).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let mut context = ExecutionContext::new();
                flow.run(&mut context).unwrap();
                assert!(context.contains_key("calldata"));
            });
        }
    });

    assert_eq!(counter.0.load(Ordering::SeqCst), 8);
}

#[test]
fn verification_failure_has_layered_kinds() {
    let parser = stake_parser();
    let request = STAKE_REQUEST.replace("\"Stake\"", "\"Unstake\"");

    let err = parser.parse_json(&request).unwrap_err();
    assert_eq!(
        err.kinds(),
        vec![
            ErrorKind::ParserFailure,
            ErrorKind::SchemaVerificationFailure,
            ErrorKind::FlowNotFound
        ]
    );
}
