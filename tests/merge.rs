use mmgroup::group::{GroupTable, KeyFate, merge_groups, walk_order};

fn table_of(rows: &[(&str, Vec<u64>)]) -> GroupTable {
    let mut table = GroupTable::new();
    for (key, counts) in rows {
        table.insert(key, counts.clone()).unwrap();
    }
    table
}

fn rows_of(table: &GroupTable) -> Vec<(String, Vec<u64>)> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn fate_of(decisions: &[mmgroup::group::MergeDecision], key: &str) -> KeyFate {
    decisions
        .iter()
        .find(|d| d.key == key)
        .map(|d| d.fate.clone())
        .unwrap()
}

#[test]
fn disjoint_keys_are_untouched() {
    let table = table_of(&[("A_B", vec![1, 2]), ("C_D", vec![3, 4]), ("A_C", vec![5, 6])]);
    let before = rows_of(&table);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(rows_of(&outcome.table), before);
    assert!(outcome.decisions.iter().all(|d| d.fate == KeyFate::Kept));
    assert_eq!(outcome.merged_away(), 0);
}

#[test]
fn unique_superset_absorbs_subset() {
    let table = table_of(&[("A_B", vec![1, 20]), ("A_B_C", vec![10, 5]), ("D_E", vec![7, 7])]);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(
        rows_of(&outcome.table),
        vec![
            ("A_B_C".to_string(), vec![11, 25]),
            ("D_E".to_string(), vec![7, 7]),
        ]
    );
    assert_eq!(
        fate_of(&outcome.decisions, "A_B"),
        KeyFate::MergedInto("A_B_C".to_string())
    );
}

#[test]
fn ambiguous_containment_is_left_alone() {
    let table = table_of(&[("X_Y", vec![1, 1]), ("X_Y_Z", vec![2, 2]), ("X_Y_W", vec![3, 3])]);
    let before = rows_of(&table);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(rows_of(&outcome.table), before);
    assert_eq!(
        fate_of(&outcome.decisions, "X_Y"),
        KeyFate::Ambiguous { supersets: 2 }
    );
    assert_eq!(outcome.ambiguous(), 1);
}

#[test]
fn walk_is_longest_first_and_stable_on_ties() {
    let table = table_of(&[
        ("A_B", vec![1]),
        ("C_D_E", vec![1]),
        ("A_B_C", vec![1]),
        ("D_E", vec![1]),
    ]);
    let order: Vec<String> = walk_order(&table)
        .iter()
        .map(|k| k.as_str().to_string())
        .collect();
    assert_eq!(order, vec!["C_D_E", "A_B_C", "A_B", "D_E"]);
}

#[test]
fn merged_away_key_is_not_a_target() {
    // A_B sits inside both A_B_C and A_B_C_D, but A_B_C is folded first.
    let table = table_of(&[("A_B", vec![1, 0]), ("A_B_C", vec![0, 10]), ("A_B_C_D", vec![100, 0])]);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(
        rows_of(&outcome.table),
        vec![("A_B_C_D".to_string(), vec![101, 10])]
    );
    assert_eq!(
        fate_of(&outcome.decisions, "A_B"),
        KeyFate::MergedInto("A_B_C_D".to_string())
    );
}

#[test]
fn chain_accumulates_into_the_top() {
    let table = table_of(&[
        ("g1_g2_g3_g4", vec![1, 1]),
        ("g1_g2", vec![2, 2]),
        ("g1_g2_g3", vec![4, 4]),
    ]);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(
        rows_of(&outcome.table),
        vec![("g1_g2_g3_g4".to_string(), vec![7, 7])]
    );
    assert_eq!(outcome.merged_away(), 2);
}

#[test]
fn reordered_twins_merge_first_into_second() {
    let table = table_of(&[("A_B", vec![1, 2]), ("B_A", vec![3, 4])]);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(rows_of(&outcome.table), vec![("B_A".to_string(), vec![4, 6])]);
    assert_eq!(fate_of(&outcome.decisions, "B_A"), KeyFate::Kept);
}

#[test]
fn reordered_twins_with_common_superset_stay_ambiguous() {
    let table = table_of(&[("A_B", vec![1, 2]), ("B_A", vec![3, 4]), ("A_B_C", vec![5, 6])]);
    let before = rows_of(&table);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(rows_of(&outcome.table), before);
    assert_eq!(
        fate_of(&outcome.decisions, "A_B"),
        KeyFate::Ambiguous { supersets: 2 }
    );
    assert_eq!(
        fate_of(&outcome.decisions, "B_A"),
        KeyFate::Ambiguous { supersets: 2 }
    );
}

#[test]
fn rerun_on_output_is_a_no_op() {
    let table = table_of(&[
        ("X_Y", vec![1, 1]),
        ("X_Y_Z", vec![2, 2]),
        ("X_Y_W", vec![3, 3]),
        ("A_B", vec![1, 0]),
        ("A_B_C", vec![0, 10]),
        ("A_B_C_D", vec![100, 0]),
    ]);
    let first = merge_groups(table).unwrap();
    let once = rows_of(&first.table);
    let second = merge_groups(first.table).unwrap();
    assert_eq!(rows_of(&second.table), once);
    assert_eq!(second.merged_away(), 0);
}

#[test]
fn worked_example_candidates_collapse() {
    let table = table_of(&[
        ("gene04_gene48_gene43_gene68_gene44", vec![10, 20]),
        ("gene53_gene88", vec![10, 20]),
        ("gene53_gene39", vec![10, 20]),
        ("gene53_gene39_gene88", vec![1, 20]),
        ("gene53_gene39_gene84", vec![10, 20]),
        ("gene53_gene86", vec![1, 20]),
        ("gene53_gene86_gene39_gene88", vec![10, 20]),
        ("gene53_gene86_gene39_gene88_gene84", vec![10, 20]),
        ("gene53_gene86_gene39_gene84", vec![10, 20]),
    ]);
    let outcome = merge_groups(table).unwrap();
    assert_eq!(
        rows_of(&outcome.table),
        vec![
            ("gene04_gene48_gene43_gene68_gene44".to_string(), vec![10, 20]),
            ("gene53_gene86_gene39_gene88_gene84".to_string(), vec![62, 160]),
        ]
    );
    assert_eq!(outcome.merged_away(), 7);
}
