use std::fs;
use std::path::Path;

use bcs_codec::{from_bytes, to_bytes, CodecError};
use bcs_codec_types::{
    signing_message, AccountAddress, ChainId, EntryFunction, ModuleId, RawTransaction,
    TransactionPayload, TypeTag,
};
use proptest::prelude::*;
use serde_json::Value;

fn fixture(name: &str) -> Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let data = fs::read_to_string(path).expect("fixture readable");
    serde_json::from_str(&data).expect("fixture json")
}

fn from_hex(s: &str) -> Vec<u8> {
    assert!(s.len() % 2 == 0, "hex length must be even");
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex"))
        .collect()
}

fn address(v: &Value) -> AccountAddress {
    v.as_str().expect("address").parse().expect("valid address")
}

fn module_id(text: &str) -> ModuleId {
    let (addr, name) = text.split_once("::").expect("module id");
    ModuleId::new(addr.parse().expect("module address"), name)
}

fn raw_transaction(fx: &Value) -> RawTransaction {
    let payload = &fx["payload"];
    assert_eq!(payload["kind"], "entry_function");
    let ty_args = payload["ty_args"]
        .as_array()
        .expect("ty_args")
        .iter()
        .map(|t| t.as_str().expect("type tag").parse::<TypeTag>().expect("valid tag"))
        .collect();
    let args = payload["args_hex"]
        .as_array()
        .expect("args")
        .iter()
        .map(|a| from_hex(a.as_str().expect("arg hex")))
        .collect();
    RawTransaction {
        sender: address(&fx["sender"]),
        sequence_number: fx["sequence_number"].as_u64().expect("sequence number"),
        payload: TransactionPayload::EntryFunction(EntryFunction::new(
            module_id(payload["module"].as_str().expect("module")),
            payload["function"].as_str().expect("function"),
            ty_args,
            args,
        )),
        max_gas_amount: fx["max_gas_amount"].as_u64().expect("max gas"),
        gas_unit_price: fx["gas_unit_price"].as_u64().expect("gas price"),
        expiration_timestamp_secs: fx["expiration_timestamp_secs"].as_u64().expect("expiry"),
        chain_id: ChainId(fx["chain_id"].as_u64().expect("chain id") as u8),
    }
}

#[test]
fn raw_transactions_match_golden_bytes() {
    let fx = fixture("transaction_vectors.json");
    for case in fx["transactions"].as_array().expect("transactions") {
        let name = case["name"].as_str().expect("name");
        let raw = raw_transaction(case);
        let expected = from_hex(case["raw_hex"].as_str().expect("raw hex"));

        assert_eq!(to_bytes(&raw).expect("encode"), expected, "encode {name}");
        assert_eq!(
            from_bytes::<RawTransaction>(&expected).expect("decode"),
            raw,
            "decode {name}"
        );
        assert_eq!(
            signing_message(&raw).expect("signing message"),
            from_hex(case["signing_message_hex"].as_str().expect("message hex")),
            "signing message {name}"
        );
    }
}

#[test]
fn type_tags_match_golden_bytes_and_text() {
    let fx = fixture("transaction_vectors.json");
    for case in fx["type_tags"].as_array().expect("type tags") {
        let text = case["text"].as_str().expect("text");
        let expected = from_hex(case["hex"].as_str().expect("hex"));
        let tag: TypeTag = text.parse().expect("parse");

        assert_eq!(tag.to_string(), text);
        assert_eq!(to_bytes(&tag).expect("encode"), expected, "encode {text}");
        assert_eq!(from_bytes::<TypeTag>(&expected), Ok(tag), "decode {text}");
    }
}

#[test]
fn truncated_transaction_never_decodes() {
    let fx = fixture("transaction_vectors.json");
    let bytes = from_hex(fx["transactions"][0]["raw_hex"].as_str().expect("raw hex"));
    for len in [0, 1, 31, 32, 40, 41, bytes.len() - 1] {
        assert_eq!(
            from_bytes::<RawTransaction>(&bytes[..len]),
            Err(CodecError::UnexpectedEndOfInput),
            "prefix of length {len}"
        );
    }
}

proptest! {
    #[test]
    fn address_text_roundtrip(bytes in any::<[u8; 32]>()) {
        let address = AccountAddress::new(bytes);
        prop_assert_eq!(address.to_string().parse::<AccountAddress>().unwrap(), address);
        prop_assert_eq!(address.to_short_string().parse::<AccountAddress>().unwrap(), address);
    }

    #[test]
    fn transaction_fields_roundtrip(
        sequence_number in any::<u64>(),
        max_gas_amount in any::<u64>(),
        chain_id in any::<u8>(),
        args in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..40), 0..4),
    ) {
        let raw = RawTransaction {
            sender: AccountAddress::ONE,
            sequence_number,
            payload: TransactionPayload::EntryFunction(EntryFunction::new(
                ModuleId::new(AccountAddress::ONE, "m"),
                "f",
                vec![TypeTag::Vector(Box::new(TypeTag::U8))],
                args,
            )),
            max_gas_amount,
            gas_unit_price: 1,
            expiration_timestamp_secs: 2,
            chain_id: ChainId(chain_id),
        };
        let bytes = to_bytes(&raw).unwrap();
        prop_assert_eq!(from_bytes::<RawTransaction>(&bytes).unwrap(), raw);
    }
}
