use biome_relay::batch::Batch;
use biome_relay::domain::SensorReading;
use biome_relay::sender::{BatchTransmitter, ClientConfig, HttpClient, TransmissionError};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_batch(seq: u64, n: usize) -> Batch {
    let readings = (0..n)
        .map(|i| SensorReading {
            timestamp: i as f64 * 100.0,
            sensor_id: 7,
            sensor_name: "bench rig".to_string(),
            sensor_value: i as f64 * 0.5,
        })
        .collect();
    Batch::new(seq, readings)
}

fn transmitter(endpoint: String) -> BatchTransmitter {
    let client = HttpClient::new(ClientConfig {
        endpoint,
        timeout: Duration::from_secs(5),
        connection_timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    })
    .unwrap();
    BatchTransmitter::new(client)
}

#[tokio::test]
async fn send_batch_posts_one_json_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let transmitter = transmitter(mock_server.uri());
    let result = transmitter.send_batch(&sample_batch(1, 3)).await.unwrap();

    assert!(result.success);
    assert_eq!(result.status_code, 200);
    assert!(result.bytes_sent > 0);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let array = body.as_array().expect("payload must be a JSON array");
    assert_eq!(array.len(), 3);

    // Exactly the four wire keys per element, readings in order
    for (i, element) in array.iter().enumerate() {
        let object = element.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["timestamp"], i as f64 * 100.0);
        assert_eq!(object["sensor_id"], 7);
        assert_eq!(object["sensor_name"], "bench rig");
        assert_eq!(object["sensor_value"], i as f64 * 0.5);
    }
}

#[tokio::test]
async fn non_success_status_is_a_result_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let transmitter = transmitter(mock_server.uri());
    let result = transmitter.send_batch(&sample_batch(1, 2)).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.status_code, 500);
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    // Nothing listens on port 1
    let transmitter = transmitter("http://127.0.0.1:1".to_string());
    let result = transmitter.send_batch(&sample_batch(1, 2)).await;

    match result {
        Err(TransmissionError::RequestFailed(_)) => {}
        other => panic!("Expected RequestFailed, got: {other:?}"),
    }
}
