use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use pretty_assertions::assert_eq;

use dpeecs::{tables::*, *};

fn approx_equal(expected: f32, got: f32) -> bool {
    let res = (expected - got).abs() < 0.001;
    if !res {
        eprintln!(
            "Expected: {}, Got: {}, Diff: {}",
            expected,
            got,
            expected - got
        );
    }
    res
}

fn read(path: &str) -> String {
    let mut f = File::open(Path::new(path)).unwrap();
    let mut s = String::new();
    f.read_to_string(&mut s).unwrap();
    s
}

fn get_system(path: &str) -> System {
    read(path).parse().unwrap()
}

fn compute_with_defaults(system: &System) -> Result<Efficiencies, EcsError> {
    let fecs = data::empty_fecs();
    let rd = data::default_rd().unwrap();
    let rg = data::default_rg().unwrap();
    Engine::new(&fecs, &rd, &rg).compute(system)
}

#[test]
fn instantaneous_electric_heater() {
    let system = get_system("test_data/ecs_instantane_elec.json");
    let rg_table: RgData = read("test_data/rg_test.csv").parse().unwrap();
    let rd_table = data::default_rd().unwrap();
    let res = Engine::new(&data::empty_fecs(), &rd_table, &rg_table)
        .compute(&system)
        .unwrap();

    assert_eq!(res.len(), 2);
    for e in &res {
        assert_eq!(e.fecs, 0.0);
        assert_eq!(e.rd, 0.93);
        // No storage losses: generic storage formula gives 1
        assert_eq!(e.rs, 1.0);
        assert_eq!(e.rg, 0.95);
        assert_eq!(e.rgs, 1.0);
        assert!(approx_equal(1.0 / (0.95 * 0.93), e.iecs));
    }
}

#[test]
fn labelled_vertical_tank() {
    let system = get_system("test_data/ecs_ballon_vertical_nfc.json");
    let res = compute_with_defaults(&system).unwrap();
    let e = res.get(Scenario::CONVENTIONAL).unwrap();
    assert_eq!(e.rd, 0.85);
    assert_eq!(e.rs, 1.08 / (1.0 + (500.0 * 0.85) / (3_000_000.0 * 1000.0)));
    assert_eq!(e.rg, 1.0);
    assert!(approx_equal(1.0893, e.iecs));
}

#[test]
fn insulated_district_network() {
    let system = get_system("test_data/ecs_reseau_chaleur.json");
    let res = compute_with_defaults(&system).unwrap();
    for e in &res {
        assert_eq!(e.rd, 0.75);
        assert_eq!(e.rs, 1.0);
        assert_eq!(e.rg, 1.0);
        assert_eq!(e.rgs, 0.9);
        assert!(approx_equal(1.4815, e.iecs));
    }
    assert_eq!(
        rgs_combustion(
            system.generator.gtype,
            system.generator.energy,
            system.becs(Scenario::CONVENTIONAL),
            0.0,
            &system.generator.performance
        ),
        1.0
    );

    let mut uninsulated = system.clone();
    uninsulated.network.insulation = NetworkInsulation::UNINSULATED;
    let res = compute_with_defaults(&uninsulated).unwrap();
    assert!(res.iter().all(|e| e.rgs == 0.75));
}

#[test]
fn no_solar_system_means_no_solar_fraction() {
    // The empty Fecs table would fail on any lookup
    for path in &[
        "test_data/ecs_instantane_elec.json",
        "test_data/ecs_chaudiere_gaz.json",
        "test_data/ecs_reseau_chaleur.json",
    ] {
        let system = get_system(path);
        assert_eq!(system.solar, None);
        let res = compute_with_defaults(&system).unwrap();
        assert!(res.iter().all(|e| e.fecs == 0.0), "{}", path);
    }
}

#[test]
fn missing_distribution_yield() {
    let system = get_system("test_data/ecs_instantane_elec.json");
    let rd_table: RdData = read("test_data/rd_collectif.csv").parse().unwrap();
    let rg_table = data::default_rg().unwrap();
    let res = Engine::new(&data::empty_fecs(), &rd_table, &rg_table).compute(&system);
    match res {
        Err(EcsError::MissingValue { table, key }) => {
            assert_eq!(table, Table::RD);
            assert!(key.contains("collective: false"), "{}", key);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn records_follow_scenario_order() {
    let system = get_system("test_data/ecs_solaire.json");
    let fecs_table: FecsData = read("test_data/fecs_test.csv").parse().unwrap();
    let rd = data::default_rd().unwrap();
    let rg = data::default_rg().unwrap();
    let res = efficiencies(&system, &fecs_table, &rd, &rg).unwrap();
    let scenarios: Vec<Scenario> = res.iter().map(|e| e.scenario).collect();
    assert_eq!(scenarios, vec![Scenario::CONVENTIONAL, Scenario::INTENSIVE]);
}

#[test]
fn solar_fraction_by_installation_age() {
    let mut system = get_system("test_data/ecs_solaire.json");
    let fecs_table: FecsData = read("test_data/fecs_test.csv").parse().unwrap();
    let rd = data::default_rd().unwrap();
    let rg = data::default_rg().unwrap();
    let engine = Engine::new(&fecs_table, &rd, &rg);

    let res = engine.compute(&system).unwrap();
    let conv = res.get(Scenario::CONVENTIONAL).unwrap();
    let intens = res.get(Scenario::INTENSIVE).unwrap();
    assert_eq!(conv.fecs, 0.6);
    assert!(approx_equal(1.0757, conv.iecs));
    assert!(approx_equal(1.0756, intens.iecs));
    let becs = system.becs(Scenario::CONVENTIONAL);
    assert!(approx_equal(0.4 * conv.iecs, conv.consumption(becs) / becs));
    assert!(approx_equal(0.6 * conv.iecs, conv.solar_production(becs) / becs));

    system.building.calculation_year = Some(2030);
    let res = engine.compute(&system).unwrap();
    assert!(res.iter().all(|e| e.fecs == 0.5));

    // User value wins over the table
    system.solar = Some(Solar {
        usage: Some(SolarUsage::DHW_ONLY),
        fecs: Some(0.3),
    });
    let res = engine.compute(&system).unwrap();
    assert!(res.iter().all(|e| e.fecs == 0.3));
}

#[test]
fn combustion_values_carry_over_scenarios() {
    let system = get_system("test_data/ecs_chaudiere_gaz.json");
    let res = compute_with_defaults(&system).unwrap();
    let conv = res.get(Scenario::CONVENTIONAL).unwrap();
    let intens = res.get(Scenario::INTENSIVE).unwrap();

    let losses = system.total_storage_losses(Scenario::CONVENTIONAL);
    let perf = &system.generator.performance;
    let rgs_conv = rgs_combustion(
        GeneratorType::BOILER,
        EnergySource::NATURAL_GAS,
        system.becs(Scenario::CONVENTIONAL),
        losses,
        perf,
    );
    let rgs_intens = rgs_combustion(
        GeneratorType::BOILER,
        EnergySource::NATURAL_GAS,
        system.becs(Scenario::INTENSIVE),
        losses,
        perf,
    );
    assert!(rgs_intens > rgs_conv);
    assert!(approx_equal(0.6675, rgs_conv));

    assert_eq!(conv.rgs, rgs_conv);
    // The conventional value is still part of the intensive minimum
    assert_eq!(intens.rgs, rgs_conv);
    assert!(approx_equal(1.6109, conv.iecs));
    assert!(approx_equal(1.6109, intens.iecs));
}

#[test]
fn invalid_inputs_are_rejected() {
    let mut system = get_system("test_data/ecs_chaudiere_gaz.json");
    system.generator.performance.rpn = None;
    match compute_with_defaults(&system) {
        Err(EcsError::Precondition(_)) => (),
        other => panic!("unexpected result {:?}", other),
    }

    let mut system = get_system("test_data/ecs_instantane_elec.json");
    system.storage_losses.intensive = -1.0;
    match compute_with_defaults(&system) {
        Err(EcsError::Precondition(_)) => (),
        other => panic!("unexpected result {:?}", other),
    }

    let mut system = get_system("test_data/ecs_reseau_chaleur.json");
    for cop in &[0.0, -2.0, std::f32::NAN] {
        system.generator.performance.cop = Some(*cop);
        match compute_with_defaults(&system) {
            Err(EcsError::Precondition(_)) => (),
            other => panic!("unexpected result for cop {}: {:?}", cop, other),
        }
    }
    system.generator.performance.cop = Some(0.8);
    let res = compute_with_defaults(&system).unwrap();
    assert!(res.iter().all(|e| e.rgs == 0.8));

    let invalid: Result<System, _> = read("test_data/ecs_invalide.json").parse();
    match invalid {
        Err(EcsError::ParseError(_)) => (),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn boiler_families() {
    let gtype: GeneratorType = BoilerType::MULTI_BUILDING_BOILER.into();
    assert_eq!(gtype, GeneratorType::MULTI_BUILDING_BOILER);
    assert!(rgs_network_applicable(gtype));
}

#[test]
fn plain_report() {
    let system = get_system("test_data/ecs_reseau_chaleur.json");
    let res = compute_with_defaults(&system).unwrap();
    let report = res.to_plain();
    assert!(report.starts_with("** Rendements ECS"));
    assert!(report.contains("* Scénario CONVENTIONAL\nFecs = 0.000\nRd = 0.750"));
    assert!(report.contains("Rgs = 0.900\nIecs = 1.481"));
}
