//! ASCII banners.

pub const TITLE: &str = r#"
  _   _            _                ____        __
 | \ | | __ _  ___| |__   ___  ___ |  _ \  ___ / _| ___ _ __  ___  ___
 |  \| |/ _` |/ __| '_ \ / _ \/ __|| | | |/ _ \ |_ / _ \ '_ \/ __|/ _ \
 | |\  | (_| | (__| | | | (_) \__ \| |_| |  __/  _|  __/ | | \__ \  __/
 |_| \_|\__,_|\___|_| |_|\___/|___/|____/ \___|_|  \___|_| |_|___/\___|
"#;

pub const SEAGULL: &str = r#"
        __           __
    ___( o)>     <(o )___
    \ <_. )       ( ._> /
     `---'         `---'
"#;

pub const VICTORY: &str = r#"
 __   __                                  _
 \ \ / /__  _   _  __      _____  _ __   | |
  \ V / _ \| | | | \ \ /\ / / _ \| '_ \  | |
   | | (_) | |_| |  \ V  V / (_) | | | | |_|
   |_|\___/ \__,_|   \_/\_/ \___/|_| |_| (_)
"#;

pub const DEFEAT: &str = r#"
 __   __            _           _    _
 \ \ / /__  _   _  | | ___  ___| |_ | |
  \ V / _ \| | | | | |/ _ \/ __| __|| |
   | | (_) | |_| | | | (_) \__ \ |_ |_|
   |_|\___/ \__,_| |_|\___/|___/\__|(_)
"#;
