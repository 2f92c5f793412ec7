#![allow(dead_code)]

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

use coincap_view::Asset;

/// Serve exactly one HTTP response on a random local port.
/// Returns the URL to request.
pub fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Read until the end of the request headers; GET has no body.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
        }
    });

    format!("http://{}/v2/assets", addr)
}

/// A port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/v2/assets", addr)
}

/// JSON body shaped like `GET /v2/assets` with `n` assets.
pub fn assets_body(n: usize) -> String {
    let data: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":"coin-{i}","rank":"{rank}","symbol":"C{i}","name":"Coin {i}","priceUsd":"{price}","marketCapUsd":"1000000.5","changePercent24Hr":"-0.5"}}"#,
                i = i,
                rank = i + 1,
                price = 1000.0 + i as f64
            )
        })
        .collect();
    format!(r#"{{"data":[{}],"timestamp":1718000000000}}"#, data.join(","))
}

pub fn sample_assets(n: usize) -> Vec<Asset> {
    (0..n)
        .map(|i| Asset {
            id: format!("coin-{}", i),
            rank: (i + 1).to_string(),
            name: format!("Coin {}", i),
            symbol: format!("C{}", i),
            price_usd: format!("{}", 1000.0 + i as f64),
            market_cap_usd: "1000000.5".to_string(),
            change_percent_24_hr: "-0.5".to_string(),
        })
        .collect()
}
