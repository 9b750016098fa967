//! End-to-end tests for the synthesis path and the embedding path.
//!
//! Tests cover the transform laws, gate emission, and the reversible embedding.

use revsynth_rs::anf::AnfCoefficients;
use revsynth_rs::circuit::Circuit;
use revsynth_rs::config::SynthConfig;
use revsynth_rs::embed::{FunctionMap, ReversibleMapping};
use revsynth_rs::expr::AnfSystem;
use revsynth_rs::io::{parse_function_map, parse_truth_tables};
use revsynth_rs::table::TruthTable;
use revsynth_rs::types::Qubit;
use revsynth_rs::SynthError;

// ─── Transform Laws ────────────────────────────────────────────────────────────

#[test]
fn transform_is_an_involution_on_four_inputs() {
    for f in (0u32..(1 << 16)).step_by(97) {
        let table = TruthTable::from_fn(4, |m| (f >> m) & 1 == 1).unwrap();
        let anf = AnfCoefficients::from_truth_table(&table);
        let again = AnfCoefficients::from_truth_table(&anf.to_truth_table());
        assert_eq!(again, anf);
        // Applying the transform to the coefficients returns the table.
        let back = AnfCoefficients::transform(anf.coefficients(), &SynthConfig::default()).unwrap();
        assert_eq!(back.coefficients(), table.bits());
    }
}

#[test]
fn expression_reproduces_table_on_five_inputs() {
    let table = TruthTable::from_fn(5, |m| (m * 7 + 3) % 5 < 2).unwrap();
    let system = AnfSystem::from_truth_tables(&[table.clone()], &SynthConfig::default()).unwrap();
    assert_eq!(system.inputs(), ["a", "b", "c", "d", "e"]);
    assert_eq!(system.equations()[0].to_truth_table().unwrap(), table);
}

// ─── Synthesis ─────────────────────────────────────────────────────────────────

#[test]
fn and_synthesizes_to_one_toffoli() {
    let tables = parse_truth_tables("0 0 0 1\n").unwrap();
    let config = SynthConfig::default();
    let system = AnfSystem::from_truth_tables(&tables, &config).unwrap();
    assert_eq!(system.equations()[0].to_string(), "ab");

    let circuit = Circuit::synthesize(&system, &config);
    assert_eq!(circuit.gates().len(), 1);
    assert_eq!(circuit.gates()[0].controls(), &[Qubit::new(0), Qubit::new(1)]);
    assert!(circuit.gates().iter().all(|g| !g.is_unconditional()));
}

#[test]
fn multi_output_file_round_trip() {
    let content = "\
0 1 1 0 1 0 0 1

0 0 0 1 0 1 1 1
1 1 1 1 1 1 1 1
";
    let tables = parse_truth_tables(content).unwrap();
    let config = SynthConfig::default();
    let system = AnfSystem::from_truth_tables(&tables, &config).unwrap();
    assert_eq!(system.outputs(), ["a0", "b0", "c0"]);
    assert_eq!(system.equations()[0].to_string(), "a ⊕ b ⊕ c");
    assert_eq!(system.equations()[1].to_string(), "ab ⊕ ac ⊕ bc");
    assert_eq!(system.equations()[2].to_string(), "1");

    let circuit = Circuit::synthesize(&system, &config);
    assert_eq!(circuit.num_qubits(), 6);
    assert_eq!(
        circuit.gate_labels(),
        ["TOF4(a)", "TOF4(b)", "TOF4(c)", "TOF5(a,b)", "TOF5(a,c)", "TOF5(b,c)", "TOF6()"]
    );
    assert_eq!(circuit.qubits()[5].description(), "TOF6()");
    assert!(circuit.verify(&tables));
}

#[test]
fn custom_gate_prefix() {
    let config = SynthConfig {
        gate_prefix: "CNOT",
        ..SynthConfig::default()
    };
    let system = AnfSystem::from_rows(&[vec![0, 1]], &config).unwrap();
    let circuit = Circuit::synthesize(&system, &config);
    assert_eq!(circuit.gate_labels(), ["CNOT2(a)"]);
}

#[test]
fn mismatched_tables_are_rejected() {
    let tables = parse_truth_tables("0 1 1 0\n0 1\n").unwrap();
    assert_eq!(
        AnfSystem::from_truth_tables(&tables, &SynthConfig::default()),
        Err(SynthError::InconsistentTableLengths { expected: 4, found: 2 })
    );
}

// ─── Embedding ─────────────────────────────────────────────────────────────────

#[test]
fn embedding_of_collapsing_single_output() {
    let f = parse_function_map("00 1\n01 0\n10 1\n11 0\n").unwrap().unwrap();
    let r = ReversibleMapping::from_function(&f, &SynthConfig::default()).unwrap();
    assert_eq!(r.garbage_outputs(), 1);
    assert_eq!(r.garbage_inputs(), 0);
    assert_eq!(r.len(), 4);
    assert!(r.is_bijection());
    assert_eq!(r.output_columns()[0], vec![1, 0, 1, 0]);
}

#[test]
fn embedding_of_full_adder() {
    // (a, b, cin) -> (sum, carry)
    let f = FunctionMap::from_fn(3, 2, |x| {
        let ones = x.count_ones() as u64;
        ((ones & 1) << 1) | (ones >> 1)
    })
    .unwrap();
    let r = ReversibleMapping::from_function(&f, &SynthConfig::default()).unwrap();
    // Outputs 01 and 10 both occur three times.
    assert_eq!(f.max_repetitions(), 3);
    assert_eq!(r.garbage_outputs(), 2);
    assert_eq!(r.garbage_inputs(), 1);
    assert_eq!(r.width(), 4);
    assert!(r.is_bijection());
    for (x, y) in f.iter() {
        assert_eq!(r.apply(x).map(|o| o >> 2), Some(y));
    }
}

#[test]
fn embedding_requires_entries() {
    let f = FunctionMap::new(3, 3).unwrap();
    assert_eq!(
        ReversibleMapping::from_function(&f, &SynthConfig::default()),
        Err(SynthError::EmptyFunctionSpecification)
    );
}
