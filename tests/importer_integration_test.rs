// ==========================================
// ProductImporter 集成测试
// ==========================================
// 测试目标: 验证从 CSV 文件到 tbl_product_data 的完整导入流程
// ==========================================

mod test_helpers;

use product_import::importer::{ImportError, ImportOptions, ProductImporter, ProductImporterImpl};
use product_import::logging;
use product_import::repository::{ProductRepository, ProductRepositoryImpl};
use product_import::{RowError, RowErrorKind, ValidationFailure};
use test_helpers::{count_rows, create_test_db, open_conn, write_csv};

/// 创建落库到临时数据库的导入器
fn create_test_importer(db_path: &str) -> ProductImporterImpl<ProductRepositoryImpl> {
    let repo = ProductRepositoryImpl::new(db_path).expect("Failed to create ProductRepository");
    ProductImporterImpl::new(repo)
}

#[test]
fn test_import_mixed_fixture() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let report = importer
        .import_from_csv("tests/fixtures/products_mixed.csv", &ImportOptions::default())
        .expect("Import should succeed");

    assert_eq!(report.processed, 5);
    assert_eq!(report.success, 1);
    assert_eq!(report.error, 4);
    assert!(report.is_balanced());
    assert!(!report.interrupted);

    let repo = importer.sink();
    assert!(repo.exists_by_code("P0001").unwrap());
    for code in ["P0002", "P0003", "P0004"] {
        assert!(!repo.exists_by_code(code).unwrap(), "{} 不应写入", code);
    }

    let stored = repo.find_by_code("P0001").unwrap().unwrap();
    assert_eq!(stored.product_name, "TV");
    assert_eq!(stored.product_desc, "32” TV");
    assert_eq!(stored.stock, 10);
    assert_eq!(stored.cost, Some(399.99));
    assert_eq!(stored.discontinued_at, None);

    let reasons: Vec<RowError> = report.failed_rows.iter().map(|f| f.error.clone()).collect();
    assert_eq!(
        reasons,
        vec![
            RowError::from(ValidationFailure::MissingRequiredField),
            RowError::from(ValidationFailure::LowValueLowStock),
            RowError::from(ValidationFailure::CostTooHigh),
            RowError::from(ValidationFailure::MissingRequiredField),
        ]
    );
    assert_eq!(
        report.failed_raw_rows(),
        vec![
            "P0002,CD Player,,20,50.12,",
            "P0003,VCR,Top notch VCR,0,4.00,",
            "P0004,Bluray Player,Watch it in HD,1,1100,",
            ",Invalid Product,,20,50.12,",
        ]
    );
}

#[test]
fn test_import_valid_fixture() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let report = importer
        .import_from_csv("tests/fixtures/products_valid.csv", &ImportOptions::default())
        .expect("Import should succeed");

    assert_eq!(report.processed, 2);
    assert_eq!(report.success, 2);
    assert_eq!(report.error, 0);
    assert!(report.failed_rows.is_empty());

    let repo = importer.sink();
    assert!(repo.exists_by_code("P0011").unwrap());
    assert!(repo.exists_by_code("P0012").unwrap());

    // "$4.99" 去掉货币符号后落库
    let cables = repo.find_by_code("P0011").unwrap().unwrap();
    assert_eq!(cables.cost, Some(4.99));

    // Discontinued=yes 时停产时间等于导入时间
    let tv = repo.find_by_code("P0012").unwrap().unwrap();
    assert_eq!(tv.discontinued_at, Some(tv.added_at));

    let conn = open_conn(&db_path).unwrap();
    assert_eq!(count_rows(&conn).unwrap(), 2);
}

#[test]
fn test_import_edge_fixture() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let report = importer
        .import_from_csv("tests/fixtures/products_edge.csv", &ImportOptions::default())
        .expect("Import should succeed");

    // 空白行不计数
    assert_eq!(report.processed, 4);
    assert_eq!(report.success, 1);
    assert_eq!(report.error, 3);

    let kinds: Vec<RowErrorKind> = report.failed_rows.iter().map(|f| f.error.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            RowErrorKind::Structure,
            RowErrorKind::Validation,
            RowErrorKind::Validation
        ]
    );
    assert_eq!(
        report.failed_rows[2].error,
        RowError::from(ValidationFailure::InvalidStockFormat)
    );
    assert!(importer.sink().exists_by_code("P0021").unwrap());
}

#[test]
fn test_dry_run_persists_nothing() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    let dry = create_test_importer(&db_path)
        .import_from_csv("tests/fixtures/products_mixed.csv", &ImportOptions::dry_run())
        .expect("Dry run should succeed");

    let conn = open_conn(&db_path).unwrap();
    assert_eq!(count_rows(&conn).unwrap(), 0);
    assert!(dry.dry_run);

    let live = create_test_importer(&db_path)
        .import_from_csv("tests/fixtures/products_mixed.csv", &ImportOptions::default())
        .expect("Import should succeed");

    assert_eq!(
        (dry.processed, dry.success, dry.error),
        (live.processed, live.success, live.error)
    );
    assert_eq!(dry.failed_raw_rows(), live.failed_raw_rows());
    assert_eq!(count_rows(&conn).unwrap(), 1);
}

#[test]
fn test_sink_rejection_is_reported() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");

    // 数据库层拒绝特定编码
    let conn = open_conn(&db_path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TRIGGER trg_reject_p0012
        BEFORE INSERT ON tbl_product_data
        WHEN NEW.product_code = 'P0012'
        BEGIN
            SELECT RAISE(ABORT, 'product P0012 is locked');
        END;
        "#,
    )
    .unwrap();

    let importer = create_test_importer(&db_path);
    let report = importer
        .import_from_csv("tests/fixtures/products_valid.csv", &ImportOptions::default())
        .expect("Import should succeed");

    assert_eq!(report.processed, 2);
    assert_eq!(report.success, 1);
    assert_eq!(report.error, 1);
    assert!(report.is_balanced());

    let failed = &report.failed_rows[0];
    assert_eq!(failed.error.kind(), RowErrorKind::Persistence);
    assert_eq!(failed.raw_text, "P0012,TV,HD ready,45,50.00,yes");
    assert!(importer.sink().exists_by_code("P0011").unwrap());
    assert!(!importer.sink().exists_by_code("P0012").unwrap());
}

#[test]
fn test_missing_file_is_fatal() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let err = importer
        .import_from_csv("tests/fixtures/does_not_exist.csv", &ImportOptions::default())
        .unwrap_err();
    assert!(matches!(err, ImportError::FileNotFound(_)));
    assert!(err.is_file_unavailable());

    // 目录不是可读文件
    let dir = tempfile::tempdir().unwrap();
    let err = importer
        .import_from_csv(dir.path(), &ImportOptions::default())
        .unwrap_err();
    assert!(err.is_file_unavailable());
}

#[test]
fn test_header_only_and_blank_rows() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let header_only = write_csv(&[]).unwrap();
    let report = importer
        .import_from_csv(header_only.path(), &ImportOptions::default())
        .unwrap();
    assert_eq!((report.processed, report.success, report.error), (0, 0, 0));

    let blanks = write_csv(&[",,,,,", " , ,  , , , "]).unwrap();
    let report = importer
        .import_from_csv(blanks.path(), &ImportOptions::default())
        .unwrap();
    assert_eq!(report.processed, 0);
    assert!(report.failed_rows.is_empty());
}

#[test]
fn test_field_values_are_truncated_on_insert() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let importer = create_test_importer(&db_path);

    let long_name = "N".repeat(60);
    let row = format!("P000000000099,{},Desc,20,10.00,", long_name);
    let csv = write_csv(&[row.as_str()]).unwrap();

    let report = importer
        .import_from_csv(csv.path(), &ImportOptions::default())
        .unwrap();
    assert_eq!(report.success, 1);

    let stored = importer.sink().find_by_code("P000000000").unwrap().unwrap();
    assert_eq!(stored.product_name.chars().count(), 50);
}
