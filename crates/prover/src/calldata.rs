//! Calldata marshaling for the on-chain Groth16 verifier.
//!
//! The claim contract takes the proof as two G1 points (`a`, `c`), one G2
//! point (`b`) and the public-signal vector, every coordinate a
//! decimal-string unsigned integer. G2 coordinates are emitted high limb
//! first, matching the pairing encoding the verifier contract expects.

use ark_bn254::{Bn254, Fq, Fr};
use ark_ff::PrimeField;
use ark_groth16::Proof;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors during calldata parsing
#[derive(Error, Debug)]
pub enum CalldataError {
    #[error("calldata has {0} values, expected at least 8")]
    TooShort(usize),
}

/// Proof calldata in submission shape.
///
/// `input` echoes whatever followed the proof coordinates in the source
/// string; when marshaling from a proof it carries the public signals. The
/// prover's own public-signals output remains the authoritative copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidityCalldata {
    pub a: [String; 2],
    pub b: [[String; 2]; 2],
    pub c: [String; 2],
    pub input: Vec<String>,
}

fn fq_dec(value: &Fq) -> String {
    value.into_bigint().to_string()
}

pub(crate) fn fr_dec(value: &Fr) -> String {
    value.into_bigint().to_string()
}

impl SolidityCalldata {
    /// Marshal a proof and its public signals directly into calldata shape.
    pub fn from_proof(proof: &Proof<Bn254>, public_inputs: &[Fr]) -> Self {
        Self {
            a: [fq_dec(&proof.a.x), fq_dec(&proof.a.y)],
            b: [
                [fq_dec(&proof.b.x.c1), fq_dec(&proof.b.x.c0)],
                [fq_dec(&proof.b.y.c1), fq_dec(&proof.b.y.c0)],
            ],
            c: [fq_dec(&proof.c.x), fq_dec(&proof.c.y)],
            input: public_inputs.iter().map(fr_dec).collect(),
        }
    }

    /// Flatten back into the ordered numeric sequence: a, b (row-major),
    /// c, then the input tail.
    pub fn flatten(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(8 + self.input.len());
        values.extend(self.a.iter().cloned());
        values.extend(self.b.iter().flatten().cloned());
        values.extend(self.c.iter().cloned());
        values.extend(self.input.iter().cloned());
        values
    }
}

/// Serialize a proof and its public signals into the bracketed, comma-joined
/// decimal string produced by circom proof-export tooling.
pub fn export_solidity_calldata(proof: &Proof<Bn254>, public_inputs: &[Fr]) -> String {
    let quote = |values: &[String]| {
        values
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(",")
    };

    let calldata = SolidityCalldata::from_proof(proof, public_inputs);
    format!(
        "[{}],[[{}],[{}]],[{}],[{}]",
        quote(&calldata.a),
        quote(&calldata.b[0]),
        quote(&calldata.b[1]),
        quote(&calldata.c),
        quote(&calldata.input),
    )
}

/// Parse a comma-joined calldata string back into submission shape.
///
/// Strips bracket, quote and whitespace characters, splits on commas, and
/// regroups: positions 0-1 form `a`, 2-5 the two rows of `b`, 6-7 form `c`,
/// and everything after is the `input` tail.
pub fn convert_calldata(raw: &str) -> Result<SolidityCalldata, CalldataError> {
    let scrubbed: String = raw
        .chars()
        .filter(|c| !matches!(c, '"' | '[' | ']') && !c.is_whitespace())
        .collect();
    let values: Vec<String> = scrubbed
        .split(',')
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect();

    if values.len() < 8 {
        return Err(CalldataError::TooShort(values.len()));
    }

    Ok(SolidityCalldata {
        a: [values[0].clone(), values[1].clone()],
        b: [
            [values[2].clone(), values[3].clone()],
            [values[4].clone(), values[5].clone()],
        ],
        c: [values[6].clone(), values[7].clone()],
        input: values[8..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"["10","11"],[["20","21"],["22","23"]],["30","31"],["40","41"]"#;

    #[test]
    fn test_convert_groups_positions() {
        let calldata = convert_calldata(RAW).unwrap();

        assert_eq!(calldata.a, ["10".to_string(), "11".to_string()]);
        assert_eq!(
            calldata.b,
            [
                ["20".to_string(), "21".to_string()],
                ["22".to_string(), "23".to_string()]
            ]
        );
        assert_eq!(calldata.c, ["30".to_string(), "31".to_string()]);
        assert_eq!(calldata.input, vec!["40".to_string(), "41".to_string()]);
    }

    #[test]
    fn test_flatten_preserves_original_order() {
        let calldata = convert_calldata(RAW).unwrap();
        let expected: Vec<String> = ["10", "11", "20", "21", "22", "23", "30", "31", "40", "41"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(calldata.flatten(), expected);
    }

    #[test]
    fn test_convert_tolerates_whitespace() {
        let raw = r#" [ "1" , "2" ] , [ [ "3" , "4" ] , [ "5" , "6" ] ] , [ "7" , "8" ] , [ "9" ] "#;
        let calldata = convert_calldata(raw).unwrap();
        assert_eq!(calldata.a, ["1".to_string(), "2".to_string()]);
        assert_eq!(calldata.input, vec!["9".to_string()]);
    }

    #[test]
    fn test_convert_without_input_tail() {
        let raw = r#"["1","2"],[["3","4"],["5","6"]],["7","8"]"#;
        let calldata = convert_calldata(raw).unwrap();
        assert!(calldata.input.is_empty());
    }

    #[test]
    fn test_convert_too_short() {
        assert!(matches!(
            convert_calldata(r#"["1","2","3"]"#),
            Err(CalldataError::TooShort(3))
        ));
    }
}
