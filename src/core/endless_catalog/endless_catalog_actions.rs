// src/core/endless_catalog/endless_catalog_actions.rs

use crate::core::endless_types::{ActionCategory, ActionDescriptor, InputFieldDescriptor, InputType};

/// Die eingebauten Aktionen des Endless-Netzes. Gas-Werte in EDS-Gas-Einheiten.
pub fn builtin_actions() -> Vec<ActionDescriptor> {
    vec![
        ActionDescriptor::new(
            "send-eds",
            "Send EDS Tokens",
            "Transfer EDS tokens to another wallet address",
            ActionCategory::Transfer,
            21_000,
            21_000,
        )
        .with_input(InputFieldDescriptor::new("recipient", "Recipient Address", InputType::Address, true).with_placeholder("0x..."))
        .with_input(InputFieldDescriptor::new("amount", "Amount (EDS)", InputType::Number, true).with_placeholder("0.00")),
        ActionDescriptor::new(
            "call-contract",
            "Call Smart Contract Function",
            "Execute a function on a deployed smart contract",
            ActionCategory::Contract,
            45_000,
            65_000,
        )
        .with_variable_gas(200)
        .with_input(InputFieldDescriptor::new("contractAddress", "Contract Address", InputType::Address, true).with_placeholder("0x..."))
        .with_input(
            InputFieldDescriptor::new("functionName", "Function Name", InputType::Text, true)
                .with_placeholder("transfer, approve, etc."),
        )
        .with_input(
            InputFieldDescriptor::new("complexity", "Function Complexity", InputType::Select, true)
                .affecting_gas(1.0)
                .with_options(&[
                    ("simple", "Simple (view/pure)"),
                    ("moderate", "Moderate (state change)"),
                    ("complex", "Complex (multiple operations)"),
                ]),
        ),
        ActionDescriptor::new(
            "mint-miniapp",
            "Mint Mini-App",
            "Deploy and mint a new mini-application on Endless",
            ActionCategory::Nft,
            150_000,
            250_000,
        )
        .with_variable_gas(500)
        .with_input(InputFieldDescriptor::new("appName", "App Name", InputType::Text, true).with_placeholder("My Mini App"))
        .with_input(
            InputFieldDescriptor::new("metadataSize", "Metadata Size", InputType::Select, true)
                .affecting_gas(1.0)
                .with_options(&[
                    ("small", "Small (< 1KB)"),
                    ("medium", "Medium (1-5KB)"),
                    ("large", "Large (5-10KB)"),
                ]),
        ),
        ActionDescriptor::new(
            "deploy-contract",
            "Deploy Smart Contract",
            "Deploy a new smart contract to the Endless network",
            ActionCategory::Contract,
            500_000,
            800_000,
        )
        .with_variable_gas(1_000)
        .with_input(
            InputFieldDescriptor::new("contractSize", "Contract Size", InputType::Select, true)
                .affecting_gas(1.0)
                .with_options(&[
                    ("small", "Small (< 5KB)"),
                    ("medium", "Medium (5-15KB)"),
                    ("large", "Large (15-24KB)"),
                ]),
        )
        .with_input(
            InputFieldDescriptor::new("hasConstructor", "Constructor Complexity", InputType::Select, true)
                .affecting_gas(0.5)
                .with_options(&[
                    ("none", "No constructor"),
                    ("simple", "Simple initialization"),
                    ("complex", "Complex setup"),
                ]),
        ),
        ActionDescriptor::new(
            "stake-eds",
            "Stake EDS Tokens",
            "Stake EDS tokens for network validation rewards",
            ActionCategory::Defi,
            85_000,
            120_000,
        )
        .with_input(InputFieldDescriptor::new("amount", "Stake Amount (EDS)", InputType::Number, true).with_placeholder("100"))
        .with_input(
            InputFieldDescriptor::new("lockPeriod", "Lock Period", InputType::Select, true).with_options(&[
                ("30", "30 Days"),
                ("90", "90 Days"),
                ("180", "180 Days"),
                ("365", "1 Year"),
            ]),
        ),
        ActionDescriptor::new(
            "create-proposal",
            "Create Governance Proposal",
            "Submit a new governance proposal for community voting",
            ActionCategory::Governance,
            200_000,
            350_000,
        )
        .with_input(
            InputFieldDescriptor::new("proposalTitle", "Proposal Title", InputType::Text, true)
                .with_placeholder("Proposal title..."),
        )
        .with_input(
            InputFieldDescriptor::new("proposalType", "Proposal Type", InputType::Select, true)
                .affecting_gas(1.0)
                .with_options(&[
                    ("parameter", "Parameter Change"),
                    ("upgrade", "Protocol Upgrade"),
                    ("treasury", "Treasury Allocation"),
                ]),
        ),
        ActionDescriptor::new(
            "swap-tokens",
            "Swap Tokens (DEX)",
            "Swap tokens on Endless decentralized exchange",
            ActionCategory::Defi,
            120_000,
            180_000,
        )
        .with_input(InputFieldDescriptor::new("fromToken", "From Token", InputType::Text, true).with_placeholder("EDS"))
        .with_input(InputFieldDescriptor::new("toToken", "To Token", InputType::Text, true).with_placeholder("USDC"))
        .with_input(InputFieldDescriptor::new("amount", "Amount", InputType::Number, true).with_placeholder("0.00")),
        ActionDescriptor::new(
            "register-did",
            "Register DID Identity",
            "Register a new Decentralized Identity on Endless",
            ActionCategory::Contract,
            95_000,
            150_000,
        )
        .with_input(
            InputFieldDescriptor::new("didDocument", "DID Document Size", InputType::Select, true)
                .affecting_gas(1.0)
                .with_options(&[
                    ("minimal", "Minimal (basic identity)"),
                    ("standard", "Standard (with services)"),
                    ("full", "Full (with verification methods)"),
                ]),
        ),
    ]
}
