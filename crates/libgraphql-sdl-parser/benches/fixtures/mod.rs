use std::fmt::Write;

/// A hand-written schema touching every definition form.
pub const STARWARS_SCHEMA: &str = r#"
"""
The query type, represents all of the entry points into our object graph.
"""
type Query {
  hero(episode: Episode): Character
  reviews(episode: Episode!): [Review]
  search(text: String): [SearchResult]
  character(id: ID!): Character
  droid(id: ID!): Droid
  human(id: ID!): Human
  starship(id: ID!): Starship
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}

type Subscription {
  reviewAdded(episode: Episode): Review
}

"The episodes in the Star Wars trilogy"
enum Episode {
  NEWHOPE
  EMPIRE
  JEDI
}

interface Character {
  id: ID!
  name: String!
  friends: [Character]
  friendsConnection(first: Int, after: ID): FriendsConnection!
  appearsIn: [Episode]!
}

enum LengthUnit {
  METER
  FOOT
}

type Human implements Character {
  id: ID!
  name: String!
  homePlanet: String
  height(unit: LengthUnit = METER): Float
  mass: Float
  friends: [Character]
  friendsConnection(first: Int, after: ID): FriendsConnection!
  appearsIn: [Episode]!
  starships: [Starship]
}

type Droid implements Character {
  id: ID!
  name: String!
  friends: [Character]
  friendsConnection(first: Int, after: ID): FriendsConnection!
  appearsIn: [Episode]!
  primaryFunction: String @deprecated(reason: "Use `role`")
}

type FriendsConnection {
  totalCount: Int
  edges: [FriendsEdge]
  friends: [Character]
  pageInfo: PageInfo!
}

type FriendsEdge {
  cursor: ID!
  node: Character
}

type PageInfo {
  startCursor: ID
  endCursor: ID
  hasNextPage: Boolean!
}

type Review {
  episode: Episode
  stars: Int!
  commentary: String
}

input ReviewInput {
  stars: Int!
  commentary: String
  favoriteColor: ColorInput
}

input ColorInput {
  red: Int!
  green: Int!
  blue: Int!
}

type Starship {
  id: ID!
  name: String!
  length(unit: LengthUnit = METER): Float
}

union SearchResult = Human | Droid | Starship

schema {
  query: Query
  mutation: Mutation
  subscription: Subscription
}
"#;

/// Generates a schema of `count` object types, each with a handful of
/// fields, an input object, an enum and a directive definition.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 400);
    for i in 0..count {
        writeln!(out, "\"\"\"\nType number {i}.\n\"\"\"").unwrap();
        writeln!(out, "type Object{i} implements Node & Entity{i} @key(fields: \"id\") {{").unwrap();
        writeln!(out, "  id: ID!").unwrap();
        writeln!(out, "  \"The name.\"").unwrap();
        writeln!(out, "  name(locale: String = \"en\"): String").unwrap();
        writeln!(out, "  tags(first: Int = 10, after: String): [String!]!").unwrap();
        writeln!(out, "  status: Status{i} @deprecated(reason: \"gone\")").unwrap();
        writeln!(out, "}}\n").unwrap();
        writeln!(out, "input Filter{i} {{ id: ID, status: Status{i} = ACTIVE, limit: Int! }}\n").unwrap();
        writeln!(out, "enum Status{i} {{ ACTIVE INACTIVE @deprecated ARCHIVED }}\n").unwrap();
        writeln!(
            out,
            "directive @tag{i}(name: String!, filter: Filter{i}) repeatable on FIELD_DEFINITION | OBJECT\n",
        )
        .unwrap();
    }
    out
}

/// Generates a document made of `count` extensions of one base type.
pub fn many_extensions(count: usize) -> String {
    let mut out = String::with_capacity(count * 60);
    out.push_str("type Query { root: Int }\n");
    for i in 0..count {
        writeln!(out, "extend type Query @tag(n: {i}) {{ field{i}: [Int!] }}").unwrap();
    }
    out
}
