use metro_core::prelude::*;

fn linea_a() -> MetroNetwork {
    build_graph([
        ("Niquia", "Bello", 1500.0),
        ("Bello", "Madera", 1200.0),
        ("Madera", "SanJavier", 1800.0),
        ("SanJavier", "Estadio", 1300.0),
    ])
    .unwrap()
}

fn summed_weights(network: &MetroNetwork, path: &Path) -> f64 {
    path.segments()
        .map(|(a, b)| network.distance_between(a, b).unwrap())
        .sum()
}

#[test]
fn niquia_to_estadio() {
    let network = linea_a();
    let path = shortest_path(&network, "Niquia", "Estadio").unwrap();

    assert_eq!(
        path.stations,
        vec!["Niquia", "Bello", "Madera", "SanJavier", "Estadio"]
    );
    assert!((path.total_distance - 5800.0).abs() < 1e-9);
    assert!((shortest_path_length(&network, "Niquia", "Estadio").unwrap() - 5800.0).abs() < 1e-9);
}

#[test]
fn every_connected_pair_is_consistent() {
    let network = build_graph(medellin_metro_connections()).unwrap();
    let stations: Vec<&str> = network.stations().collect();

    for &origin in &stations {
        for &destination in &stations {
            match shortest_path(&network, origin, destination) {
                Ok(path) => {
                    assert_eq!(path.origin(), origin);
                    assert_eq!(path.destination(), destination);
                    let summed = summed_weights(&network, &path);
                    assert!((summed - path.total_distance).abs() < 1e-9);
                }
                Err(Error::NoPath { .. }) => {}
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let network = build_graph(medellin_metro_connections()).unwrap();
    let first = shortest_path(&network, "Niquia", "La Estrella").unwrap();
    let second = shortest_path(&network, "Niquia", "La Estrella").unwrap();
    assert_eq!(first, second);
}

#[test]
fn sample_network_keeps_last_declared_distance() {
    let network = build_graph(medellin_metro_connections()).unwrap();
    assert_eq!(network.station_count(), 23);
    assert_eq!(network.connection_count(), 22);
    // San Javier - Estadio is declared with 1300 first and 1200 last
    assert_eq!(network.distance_between("San Javier", "Estadio"), Some(1200.0));

    let path = shortest_path(&network, "Niquia", "Estadio").unwrap();
    assert_eq!(
        path.stations,
        vec!["Niquia", "Bello", "Madera", "San Javier", "Estadio"]
    );
    assert!((path.total_distance - 5700.0).abs() < 1e-9);
}

#[test]
fn sample_network_rejects_duplicates_on_request() {
    let result = build_graph_with_policy(medellin_metro_connections(), DuplicatePolicy::Reject);
    assert!(matches!(result, Err(Error::DuplicateConnection(_, _))));
}

#[test]
fn separate_lines_are_not_connected() {
    let network = build_graph(medellin_metro_connections()).unwrap();
    let result = shortest_path(&network, "Niquia", "Santo Domingo Savio");
    assert!(matches!(
        result,
        Err(Error::NoPath { ref origin, ref destination })
            if origin == "Niquia" && destination == "Santo Domingo Savio"
    ));
}

#[test]
fn edge_list_from_csv() {
    let csv = "origin,destination,distance\n\
               Niquia,Bello,1500\n\
               Bello,Madera,1200\n\
               Madera,SanJavier,1800\n\
               SanJavier,Estadio,1300\n";
    let connections = connections_from_reader(csv.as_bytes()).unwrap();
    let network = build_graph(connections).unwrap();
    assert_eq!(
        shortest_path(&network, "Estadio", "Niquia").unwrap().total_distance,
        5800.0
    );
}
