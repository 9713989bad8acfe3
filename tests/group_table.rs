use mmgroup::group::{Eligibility, FilterParams, GroupKey, GroupTable};

#[test]
fn table_keeps_discovery_order() {
    let mut table = GroupTable::new();
    table.insert("B_C", vec![1, 2]).unwrap();
    table.insert("A_B", vec![3, 4]).unwrap();
    table.insert("C_D", vec![5, 6]).unwrap();
    table.remove("A_B");

    let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["B_C", "C_D"]);
    assert!(!table.contains("A_B"));
    assert_eq!(table.len(), 2);
}

#[test]
fn duplicate_insert_replaces_in_place() {
    let mut table = GroupTable::new();
    assert!(!table.insert("A_B", vec![1, 1]).unwrap());
    assert!(!table.insert("C_D", vec![2, 2]).unwrap());
    assert!(table.insert("A_B", vec![9, 9]).unwrap());

    let rows: Vec<(&str, Vec<u64>)> = table.iter().map(|(k, v)| (k, v.clone())).collect();
    assert_eq!(rows, vec![("A_B", vec![9, 9]), ("C_D", vec![2, 2])]);
}

#[test]
fn width_mismatch_is_rejected() {
    let mut table = GroupTable::with_width(2);
    let err = table.insert("A_B", vec![1, 2, 3]).unwrap_err();
    assert!(err.to_string().contains("width mismatch"));
}

#[test]
fn add_into_sums_elementwise() {
    let mut table = GroupTable::new();
    table.insert("A_B_C", vec![10, 20]).unwrap();
    table.add_into("A_B_C", &[1, 5]).unwrap();
    assert_eq!(table.get("A_B_C"), Some(&vec![11, 25]));
    assert!(table.add_into("missing", &[1, 1]).is_err());
}

#[test]
fn add_into_reports_overflow() {
    let mut table = GroupTable::new();
    table.insert("A_B", vec![u64::MAX]).unwrap();
    let err = table.add_into("A_B", &[1]).unwrap_err();
    assert!(err.to_string().contains("overflow"));
}

#[test]
fn single_gene_keys_pass_through() {
    let params = FilterParams::default();
    let key = GroupKey::parse("gene53");
    assert_eq!(params.classify(&key, &[10, 20]), Eligibility::PassThrough);
}

#[test]
fn low_count_groups_pass_through_or_drop() {
    let mut params = FilterParams {
        min_count: 10,
        min_genes: 2,
        drop_low_count: false,
    };
    let key = GroupKey::parse("gene53_gene86_gene39");
    assert_eq!(params.classify(&key, &[1, 0]), Eligibility::PassThrough);
    assert_eq!(params.classify(&key, &[1, 9]), Eligibility::Candidate);

    params.drop_low_count = true;
    assert_eq!(params.classify(&key, &[1, 0]), Eligibility::Dropped);
    let single = GroupKey::parse("gene05");
    assert_eq!(params.classify(&single, &[0, 0]), Eligibility::PassThrough);
}

#[test]
fn small_groups_pass_through() {
    let params = FilterParams {
        min_count: 0,
        min_genes: 3,
        drop_low_count: true,
    };
    assert_eq!(
        params.classify(&GroupKey::parse("A_B"), &[5]),
        Eligibility::PassThrough
    );
    assert_eq!(
        params.classify(&GroupKey::parse("A_B_C"), &[5]),
        Eligibility::Candidate
    );
}
