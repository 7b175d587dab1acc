//! Sample edge list of the Medellin metro (distances are not real)

use crate::Distance;

const MEDELLIN_METRO: [(&str, &str, Distance); 38] = [
    ("Niquia", "Bello", 1500.0),
    ("Bello", "Madera", 1200.0),
    ("Madera", "San Javier", 1800.0),
    ("San Javier", "Estadio", 1300.0),
    ("Estadio", "Suramericana", 1100.0),
    ("Suramericana", "Poblado", 2000.0),
    ("Poblado", "Aguacatala", 1400.0),
    ("Aguacatala", "Itagui", 1600.0),
    ("Itagui", "Sabaneta", 1200.0),
    ("Sabaneta", "La Estrella", 1000.0),
    ("San Antonio", "Alpujarra", 800.0),
    ("Alpujarra", "Cisneros", 900.0),
    ("Cisneros", "Suramericana", 1100.0),
    ("Suramericana", "Estadio", 1300.0),
    ("Estadio", "San Javier", 1200.0),
    ("San Javier", "Poblado", 1400.0),
    ("Poblado", "Aguacatala", 1500.0),
    ("Aguacatala", "Itagui", 1600.0),
    ("Itagui", "Sabaneta", 1200.0),
    ("Sabaneta", "La Estrella", 1000.0),
    ("Acevedo", "Popular", 2000.0),
    ("Popular", "Santo Domingo Savio", 1800.0),
    ("Santo Domingo Savio", "Andalucia", 1500.0),
    ("Andalucia", "La Aurora", 1200.0),
    ("San Javier", "Juan 23", 1300.0),
    ("Juan 23", "Vallejuelos", 1400.0),
    ("Miraflores", "El Poblado", 1600.0),
    ("El Poblado", "San Antonio", 1200.0),
    ("San Antonio", "Alpujarra", 800.0),
    ("Alpujarra", "Cisneros", 900.0),
    ("Cisneros", "Suramericana", 1100.0),
    ("Suramericana", "Estadio", 1300.0),
    ("Estadio", "San Javier", 1200.0),
    ("San Javier", "Poblado", 1400.0),
    ("Poblado", "Aguacatala", 1500.0),
    ("Aguacatala", "Itagui", 1600.0),
    ("Itagui", "Sabaneta", 1200.0),
    ("Sabaneta", "La Estrella", 1000.0),
];

/// Connections of the sample Medellin metro network
///
/// Some station pairs are declared more than once with different distances.
/// Built with the default duplicate policy the last declaration wins.
pub fn medellin_metro_connections() -> Vec<(&'static str, &'static str, Distance)> {
    MEDELLIN_METRO.to_vec()
}
