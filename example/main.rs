use std::{io, time::Duration};

use propjoin::{
    Value,
    futures::{from_entries, resolve_properties},
    tokio::spawn_entries,
};
use tokio::runtime::Runtime;

fn main() {
    Runtime::new().unwrap().block_on(async {
        let display = resolve_properties([
            ("width", Value::Ready(1920)),
            ("height", Value::Ready(1080)),
            ("refresh", Value::Pending(probe(60))),
        ])
        .await
        .unwrap();

        assert_eq!(display["width"], 1920);
        assert_eq!(display["height"], 1080);
        assert_eq!(display["refresh"], 60);

        let limits = from_entries([("soft", probe(1024)), ("hard", probe(4096))])
            .await
            .unwrap();

        assert_eq!(limits.keys().collect::<Vec<_>>(), [&"soft", &"hard"]);

        let spawned = spawn_entries([("a", probe(1)), ("b", probe(2))])
            .await
            .unwrap();

        assert_eq!(spawned["a"] + spawned["b"], 3);

        println!("{display:?}");
        println!("{limits:?}");
        println!("{spawned:?}");
    });
}

async fn probe(value: u32) -> Result<u32, io::Error> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    Ok(value)
}
