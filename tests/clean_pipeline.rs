use anyhow::Result;
use solicitudes::{run, CleanConfig};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const RAW: &str = "\
;sexo;tipo_de_emprendimiento;idea_negocio;barrio;estrato;comuna_ciudadano;fecha_de_beneficio;monto_del_credito;línea_credito
0;Femenino;Tienda;Venta de Ropa;San_Jose;1;16;15/03/2021;$1,200.00;Empresarial_ed
1;femenino;tienda;venta-de-ropa;san jose;1;16;2021/03/15;$1,200.00;empresarial ed
2;Masculino;Agropecuaria;Cria de Cerdos;Belen;2;7;99/99/9999;$500.00;microempresarial
3;Masculino;Servicio;;Aranjuez;3;4;01/06/2020;$2,000.00;Juridica
4;Masculino;Comercio;Venta de Flores;El-Poblado;3;14;2020/12/01;$ 3,500.00;Microcredito
";

fn write_raw(dir: &Path) -> Result<std::path::PathBuf> {
    let path = dir.join("solicitudes_de_credito.csv");
    fs::write(&path, RAW)?;
    Ok(path)
}

#[test]
fn cleans_the_export_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let input = write_raw(dir.path())?;
    let cfg = CleanConfig::new(&input, dir.path().join("files").join("output"), "clean.csv");

    let report = run(&cfg)?;
    assert_eq!(report.rows_read, 5);
    assert_eq!(report.duplicates_dropped, 1);
    assert_eq!(report.incomplete_dropped, 2);
    assert_eq!(report.rows_written, 2);

    let text = fs::read_to_string(cfg.output_path())?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "sexo;tipo_de_emprendimiento;idea_negocio;barrio;estrato;comuna_ciudadano;fecha_de_beneficio;monto_del_credito;línea_credito",
            "femenino;tienda;venta de ropa;san jose;1;16;2021-03-15;1200;empresarial ed",
            "masculino;comercio;venta de flores;el poblado;3;14;2020-12-01;3500;microcredito",
        ]
    );
    Ok(())
}

#[test]
fn output_has_no_missing_fields_and_keeps_column_order() -> Result<()> {
    let dir = tempdir()?;
    let input = write_raw(dir.path())?;
    let cfg = CleanConfig::new(&input, dir.path().join("out"), "clean.csv");
    run(&cfg)?;

    let text = fs::read_to_string(cfg.output_path())?;
    let mut lines = text.lines();
    let header = lines.next().unwrap_or_default();
    let expected_header: Vec<&str> = RAW.lines().next().unwrap().split(';').skip(1).collect();
    assert_eq!(header.split(';').collect::<Vec<_>>(), expected_header);

    for line in lines {
        let fields: Vec<&str> = line.split(';').collect();
        assert_eq!(fields.len(), expected_header.len());
        assert!(fields.iter().all(|f| !f.is_empty()), "missing field in {line:?}");
    }
    Ok(())
}

#[test]
fn rerunning_is_byte_identical_and_reuses_the_directory() -> Result<()> {
    let dir = tempdir()?;
    let input = write_raw(dir.path())?;
    let cfg = CleanConfig::new(&input, dir.path().join("out"), "clean.csv");

    run(&cfg)?;
    let first = fs::read(cfg.output_path())?;
    run(&cfg)?;
    let second = fs::read(cfg.output_path())?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn parquet_copy_is_written_when_requested() -> Result<()> {
    let dir = tempdir()?;
    let input = write_raw(dir.path())?;
    let cfg = CleanConfig {
        parquet_copy: true,
        ..CleanConfig::new(&input, dir.path().join("out"), "clean.csv")
    };

    run(&cfg)?;
    assert!(cfg.output_path().exists());
    assert!(dir.path().join("out").join("clean.parquet").exists());
    Ok(())
}

#[test]
fn missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let cfg = CleanConfig::new(dir.path().join("absent.csv"), dir.path().join("out"), "clean.csv");
    assert!(run(&cfg).is_err());
    assert!(!cfg.output_path().exists());
}
