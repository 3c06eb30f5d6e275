//! Well-known undirected graphs used for Gomory–Hu trees.
//!
//! Social networks carry no capacities, their edges have the unit attribute
//! and are meant to be used with [`Unit`](crate::core::capacity::Unit)
//! capacity.

use crate::{
    core::{id::VertexId, GraphAdd},
    storage::UnGraph,
};

/// Zachary's karate club: 34 members and 78 friendships.
pub fn karate_club() -> UnGraph<(), ()> {
    const ADJACENCY: &[(usize, &[usize])] = &[
        (0, &[1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 17, 19, 21, 31]),
        (1, &[2, 3, 7, 13, 17, 19, 21, 30]),
        (2, &[3, 7, 8, 9, 13, 27, 28, 32]),
        (3, &[7, 12, 13]),
        (4, &[6, 10]),
        (5, &[6, 10, 16]),
        (6, &[16]),
        (8, &[30, 32, 33]),
        (9, &[33]),
        (13, &[33]),
        (14, &[32, 33]),
        (15, &[32, 33]),
        (18, &[32, 33]),
        (19, &[33]),
        (20, &[32, 33]),
        (22, &[32, 33]),
        (23, &[25, 27, 29, 32, 33]),
        (24, &[25, 27, 31]),
        (25, &[31]),
        (26, &[29, 33]),
        (27, &[33]),
        (28, &[31, 33]),
        (29, &[32, 33]),
        (30, &[32, 33]),
        (31, &[32, 33]),
        (32, &[33]),
    ];

    let mut graph = UnGraph::with_capacity(34, 78);
    graph.extend_with_edges(
        ADJACENCY
            .iter()
            .flat_map(|&(u, neighbors)| neighbors.iter().map(move |&v| (u, v))),
    );
    graph
}

/// Marriage ties between Renaissance Florentine families. The vertex
/// attribute is the family name.
pub fn florentine_families() -> UnGraph<&'static str, ()> {
    const FAMILIES: [&str; 15] = [
        "Acciaiuoli",
        "Medici",
        "Castellani",
        "Peruzzi",
        "Strozzi",
        "Barbadori",
        "Ridolfi",
        "Tornabuoni",
        "Albizzi",
        "Salviati",
        "Pazzi",
        "Bischeri",
        "Guadagni",
        "Ginori",
        "Lamberteschi",
    ];

    const TIES: [(&str, &str); 20] = [
        ("Acciaiuoli", "Medici"),
        ("Castellani", "Peruzzi"),
        ("Castellani", "Strozzi"),
        ("Castellani", "Barbadori"),
        ("Medici", "Barbadori"),
        ("Medici", "Ridolfi"),
        ("Medici", "Tornabuoni"),
        ("Medici", "Albizzi"),
        ("Medici", "Salviati"),
        ("Salviati", "Pazzi"),
        ("Peruzzi", "Strozzi"),
        ("Peruzzi", "Bischeri"),
        ("Strozzi", "Ridolfi"),
        ("Strozzi", "Bischeri"),
        ("Ridolfi", "Tornabuoni"),
        ("Tornabuoni", "Guadagni"),
        ("Albizzi", "Ginori"),
        ("Albizzi", "Guadagni"),
        ("Bischeri", "Guadagni"),
        ("Guadagni", "Lamberteschi"),
    ];

    let mut graph = UnGraph::with_capacity(FAMILIES.len(), TIES.len());
    let ids = FAMILIES
        .iter()
        .map(|&name| (name, graph.add_vertex(name)))
        .collect::<rustc_hash::FxHashMap<_, _>>();

    for (a, b) in TIES {
        graph.add_edge(&ids[a], &ids[b], ());
    }

    graph
}

/// Attendance of 18 women at 14 social events in Natchez, Mississippi,
/// recorded by Davis, Gardner and Gardner in the 1930s. The graph is
/// bipartite: the first 18 vertices are the women, the remaining 14 are the
/// events `E1` to `E14`. There are 89 attendances.
pub fn davis_southern_women() -> UnGraph<&'static str, ()> {
    const EVENTS: [&str; 14] = [
        "E1", "E2", "E3", "E4", "E5", "E6", "E7", "E8", "E9", "E10", "E11", "E12", "E13", "E14",
    ];

    // Events are numbered from one.
    const ATTENDANCE: [(&str, &[usize]); 18] = [
        ("Evelyn Jefferson", &[1, 2, 3, 4, 5, 6, 8, 9]),
        ("Laura Mandeville", &[1, 2, 3, 5, 6, 7, 8]),
        ("Theresa Anderson", &[2, 3, 4, 5, 6, 7, 8, 9]),
        ("Brenda Rogers", &[1, 3, 4, 5, 6, 7, 8]),
        ("Charlotte McDowd", &[3, 4, 5, 7]),
        ("Frances Anderson", &[3, 5, 6, 8]),
        ("Eleanor Nye", &[5, 6, 7, 8]),
        ("Pearl Oglethorpe", &[6, 8, 9]),
        ("Ruth DeSand", &[5, 7, 8, 9]),
        ("Verne Sanderson", &[7, 8, 9, 12]),
        ("Myra Liddel", &[8, 9, 10, 12]),
        ("Katherina Rogers", &[8, 9, 10, 12, 13, 14]),
        ("Sylvia Avondale", &[7, 8, 9, 10, 12, 13, 14]),
        ("Nora Fayette", &[6, 7, 9, 10, 11, 12, 13, 14]),
        ("Helen Lloyd", &[7, 8, 10, 11, 12]),
        ("Dorothy Murchison", &[8, 9]),
        ("Olivia Carleton", &[9, 11]),
        ("Flora Price", &[9, 11]),
    ];

    let mut graph = UnGraph::with_capacity(ATTENDANCE.len() + EVENTS.len(), 89);
    let women = ATTENDANCE
        .iter()
        .map(|&(name, _)| graph.add_vertex(name))
        .collect::<Vec<_>>();
    let events = EVENTS
        .iter()
        .map(|&name| graph.add_vertex(name))
        .collect::<Vec<_>>();

    for (woman, (_, attended)) in women.iter().zip(ATTENDANCE) {
        for &event in attended {
            graph.add_edge(woman, &events[event - 1], ());
        }
    }

    graph
}

/// Co-appearances of the 77 characters of Victor Hugo's Les Misérables in
/// the same chapter, as compiled by Knuth. The vertex attribute is the
/// character name, there are 254 edges.
pub fn les_miserables() -> UnGraph<&'static str, ()> {
    const CHARACTERS: [&str; 77] = [
        "Napoleon", "Myriel", "MlleBaptistine", "MmeMagloire", "CountessDeLo", "Geborand",
        "Champtercier", "Cravatte", "Count", "OldMan", "Valjean", "Labarre", "Marguerite",
        "MmeDeR", "Isabeau", "Gervais", "Listolier", "Tholomyes", "Fameuil", "Blacheville",
        "Favourite", "Dahlia", "Zephine", "Fantine", "MmeThenardier", "Thenardier", "Cosette",
        "Javert", "Fauchelevent", "Bamatabois", "Perpetue", "Simplice", "Scaufflaire", "Woman1",
        "Judge", "Champmathieu", "Brevet", "Chenildieu", "Cochepaille", "Pontmercy",
        "Boulatruelle", "Eponine", "Anzelma", "Woman2", "MotherInnocent", "Gribier",
        "MmeBurgon", "Jondrette", "Gavroche", "Gillenormand", "Magnon", "MlleGillenormand",
        "MmePontmercy", "MlleVaubois", "LtGillenormand", "Marius", "BaronessT", "Mabeuf",
        "Enjolras", "Combeferre", "Prouvaire", "Feuilly", "Courfeyrac", "Bahorel", "Bossuet",
        "Joly", "Grantaire", "MotherPlutarch", "Gueulemer", "Babet", "Claquesous",
        "Montparnasse", "Toussaint", "Child1", "Child2", "Brujon", "MmeHucheloup",
    ];

    const ADJACENCY: &[(usize, &[usize])] = &[
        (0, &[1]),
        (1, &[2, 3, 4, 5, 6, 7, 8, 9, 10]),
        (2, &[3, 10]),
        (3, &[10]),
        (
            10,
            &[
                11, 12, 13, 14, 15, 23, 24, 25, 26, 27, 28, 29, 31, 32, 33, 34, 35, 36, 37, 38, 43,
                44, 48, 49, 51, 55, 58, 64, 68, 69, 70, 71, 72,
            ],
        ),
        (12, &[23]),
        (16, &[17, 18, 19, 20, 21, 22, 23]),
        (17, &[18, 19, 20, 21, 22, 23, 26, 55]),
        (18, &[19, 20, 21, 22, 23]),
        (19, &[20, 21, 22, 23]),
        (20, &[21, 22, 23]),
        (21, &[22, 23]),
        (22, &[23]),
        (23, &[24, 25, 27, 29, 30, 31]),
        (24, &[25, 26, 27, 41, 42, 50, 68, 69, 70]),
        (25, &[26, 27, 39, 40, 41, 42, 48, 55, 68, 69, 70, 71, 75]),
        (26, &[27, 43, 49, 51, 54, 55, 72]),
        (27, &[28, 29, 31, 33, 43, 48, 58, 68, 69, 70, 71, 72]),
        (28, &[44, 45]),
        (29, &[34, 35, 36, 37, 38]),
        (30, &[31]),
        (34, &[35, 36, 37, 38]),
        (35, &[36, 37, 38]),
        (36, &[37, 38]),
        (37, &[38]),
        (39, &[52, 55]),
        (41, &[42, 55, 57, 62, 68, 69, 70, 71, 75]),
        (46, &[47, 48]),
        (48, &[55, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 71, 73, 74, 75, 76]),
        (49, &[50, 51, 54, 55, 56]),
        (51, &[52, 53, 54, 55]),
        (54, &[55]),
        (55, &[56, 57, 58, 59, 61, 62, 63, 64, 65]),
        (57, &[58, 59, 61, 62, 63, 64, 65, 67]),
        (58, &[59, 60, 61, 62, 63, 64, 65, 66, 70, 76]),
        (59, &[60, 61, 62, 63, 64, 65, 66]),
        (60, &[61, 62, 63, 64, 65, 66]),
        (61, &[62, 63, 64, 65, 66]),
        (62, &[63, 64, 65, 66, 76]),
        (63, &[64, 65, 66, 76]),
        (64, &[65, 66, 76]),
        (65, &[66, 76]),
        (66, &[76]),
        (68, &[69, 70, 71, 75]),
        (69, &[70, 71, 75]),
        (70, &[71, 75]),
        (71, &[75]),
        (73, &[74]),
    ];

    let mut graph = UnGraph::with_capacity(CHARACTERS.len(), 254);
    for name in CHARACTERS {
        graph.add_vertex(name);
    }

    for &(u, neighbors) in ADJACENCY {
        for &v in neighbors {
            graph.add_edge(&VertexId::from(u), &VertexId::from(v), ());
        }
    }

    graph
}

/// Weighted example graph from the Wikipedia article on Gomory–Hu trees.
pub fn wikipedia_example() -> UnGraph<(), u32> {
    let mut graph = UnGraph::with_capacity(6, 9);
    graph.extend_with_edges([
        (0usize, 1usize, 1),
        (0, 2, 7),
        (1, 2, 1),
        (1, 3, 3),
        (1, 4, 2),
        (2, 4, 4),
        (3, 4, 1),
        (3, 5, 6),
        (4, 5, 2),
    ]);
    graph
}

#[cfg(test)]
mod tests {
    use crate::core::{id::IdType, EdgeSet, GraphRef, Neighbors, VertexSet};

    use super::*;

    #[test]
    fn karate_club_size() {
        let graph = karate_club();

        assert_eq!(graph.vertex_count(), 34);
        assert_eq!(graph.edge_count(), 78);
        assert_eq!(graph.degree_undirected(&VertexId::from(33usize)), 17);
        assert_eq!(graph.degree_undirected(&VertexId::from(0usize)), 16);
    }

    #[test]
    fn florentine_families_size() {
        let graph = florentine_families();

        assert_eq!(graph.vertex_count(), 15);
        assert_eq!(graph.edge_count(), 20);
        assert_eq!(graph[VertexId::from(1usize)], "Medici");
        assert_eq!(graph.degree_undirected(&VertexId::from(1usize)), 6);
    }

    #[test]
    fn davis_southern_women_size() {
        let graph = davis_southern_women();

        assert_eq!(graph.vertex_count(), 32);
        assert_eq!(graph.edge_count(), 89);
        assert_eq!(graph[VertexId::from(0usize)], "Evelyn Jefferson");
        assert_eq!(graph[VertexId::from(25usize)], "E8");
        assert_eq!(graph.degree_undirected(&VertexId::from(25usize)), 14);
        assert_eq!(graph.degree_undirected(&VertexId::from(15usize)), 2);
    }

    #[test]
    fn davis_southern_women_is_bipartite() {
        let graph = davis_southern_women();

        for edge in graph.edges() {
            let (u, v) = (edge.from.as_usize(), edge.to.as_usize());
            assert!(u < 18 && v >= 18, "{} - {}", graph[edge.from], graph[edge.to]);
        }
    }

    #[test]
    fn les_miserables_size() {
        let graph = les_miserables();

        assert_eq!(graph.vertex_count(), 77);
        assert_eq!(graph.edge_count(), 254);
        assert_eq!(graph[VertexId::from(10usize)], "Valjean");
        assert_eq!(graph.degree_undirected(&VertexId::from(10usize)), 36);
        assert_eq!(graph.degree_undirected(&VertexId::from(48usize)), 22);
        assert_eq!(graph.degree_undirected(&VertexId::from(0usize)), 1);
    }

    #[test]
    fn wikipedia_example_size() {
        let graph = wikipedia_example();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 9);
    }
}
