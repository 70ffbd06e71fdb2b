use petgraph::Directed;
use petgraph::stable_graph::StableGraph;
use serde::{Deserialize, Serialize};

/// Rendered width of a table box
pub const TABLE_WIDTH: f64 = 240.0;
/// Height of the table header holding its name
pub const TABLE_HEADER_HEIGHT: f64 = 36.0;
/// Height of one column row
pub const TABLE_ROW_HEIGHT: f64 = 28.0;

/// Graph node - a database table
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TableNode {
    pub name: String,
    pub columns: Vec<Column>,
    /// Top-left corner on the canvas (x, y)
    pub position: (f64, f64),
}

impl TableNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            position: (0.0, 0.0),
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = (x, y);
        self
    }

    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Box size the canvas draws for this table: fixed width, one row per column
    pub fn layout_size(&self) -> (f64, f64) {
        (
            TABLE_WIDTH,
            TABLE_HEADER_HEIGHT + self.columns.len() as f64 * TABLE_ROW_HEIGHT,
        )
    }
}

/// Table column
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub is_primary_key: bool,
    pub is_nullable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            is_primary_key: false,
            is_nullable: true,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self.is_nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_nullable = false;
        self
    }
}

/// Graph edge - a foreign key from the source table to the target table
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Relationship {
    pub name: String,
    pub relationship_type: RelationshipType,
    /// Referencing column in the source table
    pub from_column: String,
    /// Referenced column in the target table
    pub to_column: String,
}

impl Relationship {
    pub fn new(
        name: impl Into<String>,
        relationship_type: RelationshipType,
        from_column: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            relationship_type,
            from_column: from_column.into(),
            to_column: to_column.into(),
        }
    }
}

/// Cardinality of a relationship
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum RelationshipType {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

/// Schema graph: tables as nodes, foreign keys as edges
pub type SchemaGraph = StableGraph<TableNode, Relationship, Directed>;

/// Example e-commerce schema used by the demo mode of the binary
pub fn create_demo_graph() -> SchemaGraph {
    let mut graph = SchemaGraph::new();

    let users = graph.add_node(
        TableNode::new("users")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("email", "VARCHAR(255)").not_null())
            .add_column(Column::new("created_at", "TIMESTAMP").not_null()),
    );

    let categories = graph.add_node(
        TableNode::new("categories")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("name", "VARCHAR(100)").not_null()),
    );

    let products = graph.add_node(
        TableNode::new("products")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("category_id", "INTEGER").not_null())
            .add_column(Column::new("name", "VARCHAR(255)").not_null())
            .add_column(Column::new("price", "DECIMAL(10,2)").not_null()),
    );

    let orders = graph.add_node(
        TableNode::new("orders")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("user_id", "INTEGER").not_null())
            .add_column(Column::new("status", "VARCHAR(20)").not_null())
            .add_column(Column::new("created_at", "TIMESTAMP").not_null()),
    );

    let order_items = graph.add_node(
        TableNode::new("order_items")
            .add_column(Column::new("order_id", "INTEGER").not_null())
            .add_column(Column::new("product_id", "INTEGER").not_null())
            .add_column(Column::new("quantity", "INTEGER").not_null()),
    );

    let reviews = graph.add_node(
        TableNode::new("reviews")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("user_id", "INTEGER").not_null())
            .add_column(Column::new("product_id", "INTEGER").not_null())
            .add_column(Column::new("rating", "SMALLINT").not_null())
            .add_column(Column::new("body", "TEXT")),
    );

    graph.add_edge(
        products,
        categories,
        Relationship::new(
            "fk_products_category",
            RelationshipType::ManyToOne,
            "category_id",
            "id",
        ),
    );
    graph.add_edge(
        orders,
        users,
        Relationship::new(
            "fk_orders_user",
            RelationshipType::ManyToOne,
            "user_id",
            "id",
        ),
    );
    graph.add_edge(
        order_items,
        orders,
        Relationship::new(
            "fk_order_items_order",
            RelationshipType::ManyToOne,
            "order_id",
            "id",
        ),
    );
    graph.add_edge(
        order_items,
        products,
        Relationship::new(
            "fk_order_items_product",
            RelationshipType::ManyToOne,
            "product_id",
            "id",
        ),
    );
    graph.add_edge(
        reviews,
        users,
        Relationship::new(
            "fk_reviews_user",
            RelationshipType::ManyToOne,
            "user_id",
            "id",
        ),
    );
    graph.add_edge(
        reviews,
        products,
        Relationship::new(
            "fk_reviews_product",
            RelationshipType::ManyToOne,
            "product_id",
            "id",
        ),
    );

    graph
}
