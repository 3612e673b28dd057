// Copyright (c) 2026  Les contributeurs de DpeEcs

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

#[macro_use]
extern crate clap;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dpeecs::*;

// Fonctions auxiliaires -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Fichier {} introuvable", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Erreur de lecture du fichier")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) -> Result<(), Error> {
    let mut file = File::create(&path)
        .context(format!("Impossible de créer le fichier {}", path.display()))?;
    file.write_all(content)
        .context(format!("Impossible d'écrire dans le fichier {}", path.display()))?;
    Ok(())
}

/// Niveau de journalisation selon le nombre d'options -v
fn log_level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Charge une table depuis un fichier ou utilise la table par défaut
fn get_table<T, F>(fichier: Option<&str>, descr: &str, default: F) -> T
where
    T: FromStr<Err = EcsError> + MetaVec,
    F: FnOnce() -> Result<T, EcsError>,
{
    let mut table = if let Some(fichier) = fichier {
        let path = Path::new(fichier);
        let tablestring = match readfile(path) {
            Ok(tablestring) => tablestring,
            Err(err) => {
                eprintln!(
                    "ERROR: Impossible de lire la table {} \"{}\" -> {}",
                    descr,
                    path.display(),
                    err
                );
                exit(exitcode::IOERR);
            }
        };
        info!("Table {} (fichier): \"{}\"", descr, path.display());
        let mut table = T::from_str(&tablestring).unwrap_or_else(|error| {
            eprintln!(
                "ERROR: Format incorrect de la table {} \"{}\" -> {}",
                descr,
                path.display(),
                error
            );
            exit(exitcode::DATAERR);
        });
        table.set_meta("DPE_ORIGINE", &path.display().to_string());
        table
    } else {
        info!("Table {} (par défaut)", descr);
        let mut table = default().unwrap_or_else(|error| {
            eprintln!("ERROR: Table {} par défaut incorrecte -> {}", descr, error);
            exit(exitcode::DATAERR);
        });
        table.set_meta("DPE_ORIGINE", "défaut");
        table
    };
    if !table.has_meta("DPE_TABLE") {
        table.set_meta("DPE_TABLE", &descr.to_uppercase());
    }
    for meta in table.get_metavec() {
        info!("  {}: {}", meta.key, meta.value);
    }
    table
}

/// Charge la description du système
fn get_system(fichier: &str) -> System {
    let path = Path::new(fichier);
    let systemstring = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Impossible de lire le fichier du système \"{}\" -> {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    });
    info!("Système ECS: \"{}\"", path.display());
    System::from_str(&systemstring).unwrap_or_else(|error| {
        eprintln!(
            "ERROR: Format incorrect du fichier du système \"{}\" -> {}",
            path.display(),
            error
        );
        exit(exitcode::DATAERR);
    })
}

/// Résultats détaillés pour la sortie JSON
#[derive(Serialize)]
struct Report<'a> {
    system: &'a System,
    efficiencies: &'a Efficiencies,
}

// Fonction principale ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("DpeEcs")
        .bin_name("dpeecs")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2026 Les contributeurs de DpeEcs

Licence: Publié sous licence MIT.

")
        .about("DpeEcs - Rendements de l'eau chaude sanitaire (méthode 3CL-DPE).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("systeme")
            .short("s")
            .long("systeme")
            .value_name("FICHIER_SYSTEME")
            .required_unless("showlicense")
            .help("Fichier JSON de description du système d'eau chaude sanitaire")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("fecs")
            .long("fecs")
            .value_name("FICHIER_FECS")
            .help("Table des fractions solaires Fecs")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("rd")
            .long("rd")
            .value_name("FICHIER_RD")
            .help("Table des rendements de distribution Rd (défaut: valeurs incluses)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("rg")
            .long("rg")
            .value_name("FICHIER_RG")
            .help("Table des rendements de génération Rg (défaut: valeurs incluses)")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("year")
            .short("y")
            .long("year")
            .value_name("ANNEE")
            .help("Année de calcul (défaut: année du système ou année en cours)")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("fichier_sortie_json")
            .long("json")
            .value_name("FICHIER_SORTIE_JSON")
            .help("Fichier de sortie des résultats détaillés au format JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licence")
            .help("Affiche la licence du programme (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2026 Les contributeurs de DpeEcs

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."
        );
        exit(exitcode::OK);
    }

    // Prologue ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(verbosity))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("AVERTISSEMENT: journalisation indisponible ({})", err);
    }

    // Système ECS ----------------------------------------------------------------------------------
    let fichier_systeme = match matches.value_of("systeme") {
        Some(fichier) => fichier,
        None => {
            eprintln!("ERROR: Fichier du système non défini");
            exit(exitcode::USAGE);
        }
    };
    let mut system = get_system(fichier_systeme);

    if matches.is_present("year") {
        let year = value_t!(matches, "year", i32).unwrap_or_else(|error| {
            eprintln!("ERROR: L'année de calcul indiquée n'est pas une valeur entière valide");
            if verbosity > 2 {
                eprintln!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        info!("Année de calcul (utilisateur): {}", year);
        system.building.calculation_year = Some(year);
    }

    // Tables de valeurs forfaitaires ------------------------------------------------------------
    let fecs_table: tables::FecsData =
        get_table(matches.value_of("fecs"), "Fecs", || Ok(data::empty_fecs()));
    let rd_table: tables::RdData = get_table(matches.value_of("rd"), "Rd", data::default_rd);
    let rg_table: tables::RgData = get_table(matches.value_of("rg"), "Rg", data::default_rg);

    println!("** Données d'entrée");
    println!("{}", system.to_plain());

    // Calcul des rendements -------------------------------------------------------------------------
    let efficiencies = Engine::new(&fecs_table, &rd_table, &rg_table)
        .compute(&system)
        .unwrap_or_else(|error| {
            eprintln!("ERROR: Impossible de calculer les rendements -> {}", error);
            exit(exitcode::DATAERR);
        });

    // Sortie des résultats ------------------------------------------------------------------------
    if let Some(fichier) = matches.value_of_os("fichier_sortie_json") {
        let path = Path::new(fichier);
        info!("Résultats au format JSON: {}", path.display());
        let report = Report {
            system: &system,
            efficiencies: &efficiencies,
        };
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            eprintln!("ERROR: Impossible de convertir les résultats au format JSON -> {}", error);
            exit(exitcode::DATAERR);
        });
        if let Err(err) = writefile(&path, json.as_bytes()) {
            eprintln!("ERROR: {}", err);
            exit(exitcode::IOERR);
        }
    }

    println!();
    println!("{}", efficiencies.to_plain());
}
