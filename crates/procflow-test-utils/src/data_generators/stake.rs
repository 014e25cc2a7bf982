//! Generators for the "Stake" flow fixtures.

use procflow_dsl::{FlowRequest, FlowSchema, InputSchema, ProcessSchema, RequestInput, RequestProcess};

/// The reference request: `prepareCallData` with one input, then `processUserOp`.
pub const FLOW_REQUEST: &str = r#"{
    "name": "Stake",
    "process_definitions": [
        {
            "name": "prepareCallData",
            "defined_input": [
                {
                    "name": "stake_amount",
                    "value": "100000",
                    "type": "string",
                    "metaType": "bigint"
                }
            ]
        },
        {
            "name": "processUserOp",
            "defined_input": []
        }
    ]
}"#;

/// The reference request built in code
pub fn stake_request() -> FlowRequest {
    FlowRequest::new("Stake")
        .process(
            RequestProcess::new("prepareCallData")
                .input(RequestInput::new("stake_amount", "100000", "string", "bigint")),
        )
        .process(RequestProcess::new("processUserOp"))
}

fn stake_amount() -> InputSchema {
    InputSchema::new("stake_amount", "string", "bigint")
}

/// The schema [`FLOW_REQUEST`] conforms to
pub fn stake_schema() -> FlowSchema {
    FlowSchema::new("Stake")
        .process(ProcessSchema::new("prepareCallData").input(stake_amount()))
        .process(ProcessSchema::new("processUserOp"))
}

/// Same processes as [`stake_schema`], registered under another flow name
pub fn unstake_schema() -> FlowSchema {
    FlowSchema::new("Unstake")
        .process(ProcessSchema::new("prepareCallData").input(stake_amount()))
        .process(ProcessSchema::new("processUserOp"))
}

/// Declares only the first process, so the process counts differ
pub fn stake_prepare_only_schema() -> FlowSchema {
    FlowSchema::new("Stake").process(ProcessSchema::new("prepareCallData").input(stake_amount()))
}

/// Declares `signUserOp` where the request has `prepareCallData`
pub fn stake_sign_process_schema() -> FlowSchema {
    FlowSchema::new("Stake")
        .process(ProcessSchema::new("signUserOp").input(stake_amount()))
        .process(ProcessSchema::new("processUserOp"))
}

/// Declares no inputs for `prepareCallData`
pub fn stake_no_data_schema() -> FlowSchema {
    FlowSchema::new("Stake")
        .process(ProcessSchema::new("prepareCallData"))
        .process(ProcessSchema::new("processUserOp"))
}

/// A schema document declaring both "Stake" and "Unstake"
pub fn create_stake_schema_document() -> String {
    r#"
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
          - name: stake_amount
            type: string
            meta: bigint
      - name: processUserOp
"#
    .to_string()
}

/// A "Stake" request with the given amount as its only input value
pub fn create_stake_request_with_amount(amount: &str) -> String {
    FLOW_REQUEST.replace("\"100000\"", &serde_json::Value::from(amount).to_string())
}
