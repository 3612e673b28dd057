#[test]
fn instantane_electrique() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_instantane_elec.json"])
        .stdout()
        .contains("Générateur: INSTANTANEOUS (ELECTRICITY)")
        .stdout()
        .contains("* Scénario CONVENTIONAL\nFecs = 0.000\nRd = 0.930\nRs = 1.000")
        .stdout()
        .contains("Iecs = 1.075")
        .unwrap();
}

#[test]
fn instantane_electrique_table_rg() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "test_data/ecs_instantane_elec.json",
            "--rg",
            "test_data/rg_test.csv",
        ])
        .stdout()
        .contains("Rg = 0.950")
        .stdout()
        .contains("Iecs = 1.132")
        .unwrap();
}

#[test]
fn ballon_vertical_label() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_ballon_vertical_nfc.json"])
        .stdout()
        .contains("Rd = 0.850\nRs = 1.080")
        .stdout()
        .contains("Iecs = 1.089")
        .unwrap();
}

#[test]
fn reseau_chaleur() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_reseau_chaleur.json"])
        .stdout()
        .contains("Rgs = 0.900\nIecs = 1.481")
        .unwrap();
}

#[test]
fn chaudiere_gaz() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_chaudiere_gaz.json"])
        .stdout()
        .contains("* Scénario INTENSIVE")
        .stdout()
        .contains("Rgs = 0.667\nIecs = 1.611")
        .unwrap();
}

#[test]
fn solaire_table_fecs() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "test_data/ecs_solaire.json",
            "--fecs",
            "test_data/fecs_test.csv",
        ])
        .stdout()
        .contains("Solaire: DHW_ONLY")
        .stdout()
        .contains("Fecs = 0.600")
        .unwrap();
}

#[test]
fn solaire_annee_calcul() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "test_data/ecs_solaire.json",
            "--fecs",
            "test_data/fecs_test.csv",
            "-y",
            "2030",
        ])
        .stdout()
        .contains("Fecs = 0.500")
        .unwrap();
}

#[test]
fn solaire_sans_table_fecs() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_solaire.json"])
        .fails_with(65)
        .and()
        .stderr()
        .contains("FECS")
        .unwrap();
}

#[test]
fn table_rd_incomplete() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "test_data/ecs_instantane_elec.json",
            "--rd",
            "test_data/rd_collectif.csv",
        ])
        .fails_with(65)
        .and()
        .stderr()
        .contains("RD")
        .unwrap();
}

#[test]
fn systeme_invalide() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_invalide.json"])
        .fails_with(65)
        .unwrap();
}

#[test]
fn annee_invalide() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/ecs_instantane_elec.json", "-y", "deux"])
        .fails_with(65)
        .unwrap();
}

#[test]
fn fichier_absent() {
    assert_cli::Assert::main_binary()
        .with_args(&["-s", "test_data/absent.json"])
        .fails_with(74)
        .unwrap();
}

#[test]
fn sortie_json() {
    let path = std::env::temp_dir().join("dpeecs_test_cli.json");
    let path_str = path.to_str().unwrap();
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-s",
            "test_data/ecs_reseau_chaleur.json",
            "--json",
            path_str,
        ])
        .unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"efficiencies\""));
    assert!(json.contains("\"DISTRICT_NETWORK\""));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn licence() {
    assert_cli::Assert::main_binary()
        .with_args(&["--licence"])
        .stdout()
        .contains("Permission is hereby granted")
        .unwrap();
}

#[test]
fn metadonnees_tables() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "--systeme",
            "test_data/ecs_instantane_elec.json",
            "--rg",
            "test_data/rg_test.csv",
            "-v",
        ])
        .stderr()
        .contains("DPE_ORIGINE: test_data/rg_test.csv")
        .stderr()
        .contains("DPE_TABLE: FECS")
        .unwrap();
}
