#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn huellero() -> Command {
    cargo_bin_cmd!("huellero")
}

/// Isolated working directory with its own configuration and cache file.
pub struct TestEnv {
    pub dir: PathBuf,
    pub config: PathBuf,
}

impl TestEnv {
    /// Fresh directory under the system temp dir; the configuration file
    /// only points the cache inside it.
    pub fn new(name: &str) -> Self {
        let dir = Self::bare_dir(name);
        let config = dir.join("huellero.conf");
        let cache = dir.join("last_result.json");
        fs::write(
            &config,
            format!("cache_file: \"{}\"\n", cache.to_string_lossy().replace('\\', "/")),
        )
        .expect("write test config");
        Self { dir, config }
    }

    /// Same, without writing any configuration file.
    pub fn without_config(name: &str) -> Self {
        let dir = Self::bare_dir(name);
        let config = dir.join("huellero.conf");
        Self { dir, config }
    }

    fn bare_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join("huellero_tests").join(name);
        fs::remove_dir_all(&dir).ok();
        fs::create_dir_all(&dir).expect("create test dir");
        dir
    }

    /// Command with `--config` already pointing at this environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = huellero();
        cmd.arg("--config").arg(&self.config);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn write(&self, file: &str, content: &str) -> PathBuf {
        let p = self.path(file);
        fs::write(&p, content).expect("write fixture");
        p
    }

    pub fn cache_file(&self) -> PathBuf {
        self.path("last_result.json")
    }
}

/// Processing result with two employees covering every category that
/// matters for the report.
pub const PROCESSING_RESULT: &str = r#"{
  "success": true,
  "archivo": "marzo_2025.xlsx",
  "stats": { "empleados_unicos": 2, "total_registros": 6, "duplicados_eliminados": 1, "estados_inferidos": 1 },
  "db_stats": { "creados": 5, "existentes": 1, "errores": 0 },
  "datos": [
    {
      "codigo": "101", "nombre": "MARÍA GÓMEZ", "cargo": "Docente", "documento": "1.234.567",
      "registros": [
        { "fecha": "03/03/2025", "dia": "Lunes", "ingreso": "06:00", "salida": "14:00", "horas": 8.0, "observacion": "OK" },
        { "fecha": "04/03/2025", "dia": "Martes", "ingreso": "22:00", "salida": null, "horas": 8.0, "observacion": "Salida Inferida Estándar" },
        { "fecha": "05/03/2025", "dia": "Miércoles", "ingreso": null, "salida": null, "horas": null, "observacion": "SIN REGISTROS" }
      ]
    },
    {
      "codigo": "202", "nombre": "PEDRO NÚÑEZ", "cargo": "Vigilante", "documento": "7654321",
      "registros": [
        { "fecha": "03/03/2025", "dia": "Lunes", "ingreso": "22:00", "salida": "06:00", "horas": 8.0, "observacion": "Turno nocturno" },
        { "fecha": "04/03/2025", "dia": "Martes", "ingreso": "07:10", "salida": "15:00", "horas": 7.83, "observacion": "Llegada tarde" },
        { "fecha": "05/03/2025", "dia": "Miércoles", "ingreso": "06:00", "salida": "20:00", "horas": 14.0, "observacion": "ALERTA: jornada extensa" }
      ]
    }
  ]
}"#;

pub const FAILED_RESULT: &str = r#"{ "success": false, "error": "timeout leyendo el archivo" }"#;

/// Attendance map: payroll and incident rows for two collaborators, one
/// unreadable day and one day outside 1..31.
pub const ATTENDANCE_MAP: &str = r#"{
  "asistencia_data": {
    "1234567": {
      "nombre": "ZULMA RÍOS",
      "cedula": "1.234.567",
      "sede": "IE Santa Librada",
      "registros": [
        { "fuente": "nomina", "fecha": "03/03/2025", "dia": 3, "hora_ini": "06:00", "hora_fin": "14:00", "novedad": "NO" },
        { "fuente": "novedades", "fecha": "03/03/2025", "dia": 3, "hora_ini": "06:00", "hora_fin": "14:00", "tipo": "NO ASISTENCIA" },
        { "fuente": "nomina", "fecha": "04/03/2025", "dia": 4, "horas": "8:00", "novedad": "NO" },
        { "fuente": "novedades", "fecha": "05/03/2025", "dia": 5, "tipo": "DIAS NO CLASE", "horas": 8 },
        { "fuente": "nomina", "fecha": "??", "dia": "x" }
      ]
    },
    "ANA TORO": {
      "nombre": "ANA TORO",
      "registros": [
        { "fuente": "novedades", "fecha": "10/03/2025", "dia": 10, "tipo": "INCAPACIDAD", "horas": 8 },
        { "fuente": "nomina", "fecha": "40/03/2025", "dia": 40 }
      ]
    }
  }
}"#;
