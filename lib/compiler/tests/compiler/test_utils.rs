use lispform_compiler::Query;

pub const PREFIX: &str = "PREFIX ns: <http://rdf.freebase.com/ns/>";

/// Wraps `body` into the plain query template.
pub fn plain_query(body: &[&str]) -> Query {
    Query::new(format!(
        "{PREFIX}\nSELECT DISTINCT ?x\nWHERE {{\n{}\n}}\n",
        body.join("\n")
    ))
}

/// Wraps `body` into the superlative query template, ordering by `?sk0`.
pub fn superlative_query(body: &[&str], descending: bool) -> Query {
    let order = if descending {
        "ORDER BY DESC(xsd:datetime(?sk0))"
    } else {
        "ORDER BY xsd:datetime(?sk0)"
    };
    Query::new(format!(
        "{PREFIX}\nSELECT DISTINCT ?x\nWHERE {{\n{}\n}}\n{order}\nLIMIT 1\n",
        body.join("\n")
    ))
}

/// Wraps `body` into the range query template for `relation_prefix` during the year 2009.
pub fn range_query(body: &[&str], variable: &str, relation_prefix: &str) -> Query {
    Query::new(format!(
        "{PREFIX}
SELECT DISTINCT ?x
WHERE {{
{}
FILTER(NOT EXISTS {{{variable} ns:{relation_prefix}.from ?sk0}} || 
EXISTS {{{variable} ns:{relation_prefix}.from ?sk1 . 
FILTER(xsd:datetime(?sk1) <= \"2009-12-31\"^^xsd:dateTime) }})
FILTER(NOT EXISTS {{{variable} ns:{relation_prefix}.to ?sk2}} || 
EXISTS {{{variable} ns:{relation_prefix}.to ?sk3 . 
FILTER(xsd:datetime(?sk3) >= \"2009-01-01\"^^xsd:dateTime) }})
}}
",
        body.join("\n")
    ))
}
