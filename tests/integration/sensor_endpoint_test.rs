use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use sysglance::core::sampler::sensor::SensorClient;
use sysglance::core::sampler::{SampleCollector, SampleSource, UNAVAILABLE};

/// Serve a single canned HTTP response on an ephemeral port and return the
/// URL pointing at it.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{}/data.json", addr)
}

/// URL of a port nothing is listening on.
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    drop(listener);
    format!("http://{}/data.json", addr)
}

const SENSOR_REPORT: &str = r#"{"Children":[{"Children":[{"Text":"CPU Core","Children":[{"Children":[{"Text":"Temperature Core","Value":72.0}]}]}]}]}"#;

#[test]
fn reads_cpu_temperature_from_sensor_endpoint() {
    let url = serve_once("HTTP/1.1 200 OK", SENSOR_REPORT);
    let client = SensorClient::with_url(url);

    assert_eq!(client.cpu_temperature(), "72.0");
}

#[test]
fn malformed_payload_degrades_to_unavailable() {
    let url = serve_once("HTTP/1.1 200 OK", "{\"Children\": oops");
    let client = SensorClient::with_url(url);

    assert_eq!(client.cpu_temperature(), UNAVAILABLE);
}

#[test]
fn non_json_error_response_degrades_to_unavailable() {
    let url = serve_once("HTTP/1.1 404 Not Found", "not here");
    let client = SensorClient::with_url(url);

    assert_eq!(client.cpu_temperature(), UNAVAILABLE);
}

#[test]
fn unreachable_endpoint_degrades_to_unavailable() {
    let client = SensorClient::with_url(unreachable_url());

    assert_eq!(client.cpu_temperature(), UNAVAILABLE);
}

#[test]
fn silent_endpoint_times_out_to_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");

    // Accept the connection but never answer; the 1 s client timeout applies.
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(std::time::Duration::from_secs(3));
            drop(stream);
        }
    });

    let client = SensorClient::with_url(format!("http://{}/data.json", addr));
    assert_eq!(client.cpu_temperature(), UNAVAILABLE);
}

#[test]
fn collector_produces_a_full_sample() {
    let url = serve_once("HTTP/1.1 200 OK", SENSOR_REPORT);
    let mut collector = SampleCollector::with_sensor(SensorClient::with_url(url));

    let sample = collector.sample();

    assert!(sample.cpu_usage >= 0.0 && sample.cpu_usage <= 100.0);
    assert_eq!(sample.cpu_temp, "72.0");
    assert!(sample.timestamp > 0);

    // GPU fields depend on the host: either a real reading or the sentinel,
    // and both fields degrade together when no device is present.
    if sample.gpu_usage == UNAVAILABLE {
        assert_eq!(sample.gpu_temp, UNAVAILABLE);
    } else {
        assert!(sample.gpu_usage.parse::<f32>().is_ok());
        assert!(sample.gpu_temp.parse::<f32>().is_ok());
    }
}
