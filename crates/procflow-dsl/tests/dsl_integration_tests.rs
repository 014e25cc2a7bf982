use pretty_assertions::assert_eq;
use procflow_dsl::{
    error_codes, parse_flow_request_json, parse_schema_document, verify_request, SchemaRegistry,
    VerificationError,
};

const SCHEMAS: &str = r#"
dsl_version: "1.0"
flows:
  - name: Stake
    processes:
      - name: prepareCallData
        inputs:
          - name: stake_amount
            type: string
            meta: bigint
      - name: processUserOp
  - name: Unstake
    processes:
      - name: prepareCallData
        inputs:
          - name: unstake_amount
            type: string
            meta: bigint
      - name: signUserOp
      - name: processUserOp
"#;

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

fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry.register_document(parse_schema_document(SCHEMAS).expect("schema document should parse"));
    registry
}

#[test]
fn test_decode_and_verify_stake_request() {
    let registry = registry();
    let request = parse_flow_request_json(STAKE_REQUEST).unwrap();

    let schema = verify_request(&registry, &request).expect("request should verify");
    assert_eq!(schema.name, "Stake");
    assert_eq!(schema.process_definitions.len(), request.processes.len());
}

#[test]
fn test_request_against_wrong_flow_shape() {
    let registry = registry();
    let mut request = parse_flow_request_json(STAKE_REQUEST).unwrap();
    request.name = "Unstake".to_string();

    let err = verify_request(&registry, &request).unwrap_err();
    assert_eq!(err.code(), error_codes::INVALID_REQUEST);
    assert_eq!(
        err,
        VerificationError::InvalidRequest {
            flow: "Unstake".to_string(),
            expected: 3,
            actual: 2,
        }
    );
}

#[test]
fn test_unregistered_flow() {
    let registry = SchemaRegistry::new();
    let request = parse_flow_request_json(STAKE_REQUEST).unwrap();

    let err = verify_request(&registry, &request).unwrap_err();
    assert_eq!(err.code(), error_codes::FLOW_NOT_FOUND);
    assert!(err.to_string().contains("Stake"));
}

#[test]
fn test_verification_is_repeatable() {
    let registry = registry();
    let request = parse_flow_request_json(STAKE_REQUEST).unwrap();

    let first = verify_request(&registry, &request).unwrap();
    let second = verify_request(&registry, &request).unwrap();
    assert!(std::ptr::eq(first, second));
}
