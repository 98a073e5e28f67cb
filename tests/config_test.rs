use std::{env, fs, time::Duration};

use cfiamcli::config;

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_load_env_reads_dotenv_from_data_dir() {
    let data_home = env::temp_dir().join(format!("cfiamcli-config-{}", std::process::id()));
    let _ = fs::remove_dir_all(&data_home);
    // only test in this binary, nothing reads the environment concurrently
    unsafe { env::set_var("XDG_DATA_HOME", &data_home) };

    // missing file: directory is created, defaults stay
    config::load_env().await.unwrap();
    let dir = data_home.join("cfiamcli");
    assert!(dir.is_dir());
    assert_eq!(config::page_size(), config::DEFAULT_PAGE_SIZE);

    fs::write(
        dir.join(".env"),
        "CLOUDFLARE_PAGE_SIZE=25\nCLOUDFLARE_API_TIMEOUT_SECS=5\n",
    )
    .unwrap();
    config::load_env().await.unwrap();
    assert_eq!(config::page_size(), 25);
    assert_eq!(config::request_timeout(), Duration::from_secs(5));

    fs::write(dir.join(".env"), "NOT A VALID LINE\n").unwrap();
    let err = config::load_env().await.unwrap_err();
    assert!(err.to_string().contains(".env"));

    let _ = fs::remove_dir_all(&data_home);
}
