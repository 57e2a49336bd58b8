use std::collections::HashMap;

use adapter_dijkstra::{Dijkstra, Edge, GraphAdapter, Keying, NodeKey, ShortestPathAlgorithm};
use colored::*;

/// A city node; roads between cities are stored on [`RoadMap`]
#[derive(Debug, Clone)]
struct City {
    name: &'static str,
    country: &'static str,
}

struct RoadMap {
    cities: HashMap<&'static str, City>,
    roads: HashMap<&'static str, Vec<(&'static str, u32)>>,
}

impl RoadMap {
    fn new() -> Self {
        RoadMap {
            cities: HashMap::new(),
            roads: HashMap::new(),
        }
    }

    fn add_city(&mut self, name: &'static str, country: &'static str) -> City {
        let city = City { name, country };
        self.cities.insert(name, city.clone());
        city
    }

    fn add_road(&mut self, from: &'static str, to: &'static str, km: u32) {
        self.roads.entry(from).or_default().push((to, km));
        self.roads.entry(to).or_default().push((from, km));
    }
}

impl GraphAdapter for RoadMap {
    type Node = City;
    type Weight = u32;

    fn edges(&self, node: &City) -> Box<dyn Iterator<Item = Edge<City, u32>> + '_> {
        let roads = self.roads.get(node.name).map(Vec::as_slice).unwrap_or(&[]);
        Box::new(roads.iter().filter_map(|(to, km)| {
            self.cities.get(to).map(|city| Edge::new(city.clone(), *km))
        }))
    }

    fn keying(&self) -> Keying<'_, City> {
        Keying::derived(|city: &City| NodeKey::from(city.name))
    }
}

fn main() {
    env_logger::init();

    let mut map = RoadMap::new();
    let prague = map.add_city("Prague", "CZ");
    map.add_city("Bratislava", "SK");
    map.add_city("Vienna", "AT");
    map.add_city("Munich", "DE");
    map.add_city("Nuremberg", "DE");
    map.add_city("Florence", "IT");
    let rome = map.add_city("Rome", "IT");
    let reykjavik = map.add_city("Reykjavik", "IS");

    map.add_road("Prague", "Bratislava", 328);
    map.add_road("Prague", "Nuremberg", 297);
    map.add_road("Prague", "Vienna", 293);
    map.add_road("Bratislava", "Vienna", 79);
    map.add_road("Nuremberg", "Munich", 170);
    map.add_road("Vienna", "Munich", 402);
    map.add_road("Vienna", "Florence", 863);
    map.add_road("Munich", "Florence", 646);
    map.add_road("Florence", "Rome", 278);

    let dijkstra = Dijkstra::new();
    let name = <Dijkstra as ShortestPathAlgorithm<RoadMap>>::name(&dijkstra);
    println!("{}", format!("--- {} road planner ---", name).bold());

    for target in [&rome, &reykjavik] {
        let route = dijkstra
            .reconstruct_path(&map, &prague, target)
            .expect("road map derives keys");

        match route.distance {
            Some(km) => {
                let stops: Vec<_> = route
                    .path
                    .iter()
                    .map(|city| format!("{} ({})", city.name, city.country))
                    .collect();
                println!(
                    "{} -> {}: {} km",
                    prague.name.green(),
                    target.name.green(),
                    km.to_string().yellow()
                );
                println!("  via {}", stops.join(" - "));
            }
            None => println!(
                "{} -> {}: {}",
                prague.name.green(),
                target.name.red(),
                "no route".red()
            ),
        }
    }
}
