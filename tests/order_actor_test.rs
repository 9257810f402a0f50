use food_delivery::clients::{ActorClient, OrderClient, RestaurantClient, UserClient};
use food_delivery::framework::mock::MockClient;
use food_delivery::framework::{FrameworkError, ResourceActor};
use food_delivery::model::{
    Cart, CheckoutRequest, MenuItem, MenuItemId, Order, OrderStatus, PaymentMethod, Restaurant,
    RestaurantId, User, UserId,
};
use food_delivery::order_actor::{OrderContext, OrderError};
use food_delivery::user_actor::{UserActionResult, UserError};
use rust_decimal::Decimal;
use tokio::task::JoinHandle;

// Real Order actor with mocked User and Restaurant dependencies: exercises the
// checkout in Order::on_create without running the other actors.

fn customer_with_cart() -> User {
    let mut user = User::new(UserId(1), "Ana", "ana@example.com");
    user.address = Some("Rua A, 10".into());

    let mut cart = Cart::new(RestaurantId(1));
    for (id, cents, quantity) in [(1, 2500, 2), (2, 890, 1)] {
        let item = MenuItem {
            id: MenuItemId(id),
            restaurant_id: RestaurantId(1),
            name: format!("dish {id}"),
            description: None,
            category: None,
            price: Decimal::new(cents, 2),
            available: true,
        };
        cart.add_item(&item, quantity);
    }
    cart.revision = 3;
    user.cart = Some(cart);
    user.cart_revision = 3;
    user
}

fn restaurant() -> Restaurant {
    Restaurant {
        id: RestaurantId(1),
        owner_id: UserId(9),
        name: "Cantina".into(),
        address: "Rua B, 20".into(),
        description: None,
        category: None,
        phone: None,
        delivery_fee: Decimal::new(500, 2),
        delivery_time_minutes: None,
        rating: 0.0,
    }
}

fn checkout(payment_method: &str) -> CheckoutRequest {
    CheckoutRequest {
        user_id: UserId(1),
        delivery_address: None,
        payment_method: payment_method.into(),
    }
}

fn spawn_orders(
    users: &MockClient<User>,
    restaurants: &MockClient<Restaurant>,
    accepted_payments: Vec<PaymentMethod>,
) -> (OrderClient, JoinHandle<()>) {
    let (order_actor, order_client) = food_delivery::order_actor::new(8);
    let context = OrderContext {
        users: UserClient::new(users.client()),
        restaurants: RestaurantClient::new(restaurants.client()),
        accepted_payments,
    };
    let handle = tokio::spawn(order_actor.run(context));
    (order_client, handle)
}

#[tokio::test]
async fn test_checkout_with_mocked_dependencies() {
    let mut users = MockClient::<User>::new();
    let mut restaurants = MockClient::<Restaurant>::new();

    users.expect_get(UserId(1)).return_ok(Some(customer_with_cart()));
    restaurants.expect_get(RestaurantId(1)).return_ok(Some(restaurant()));
    users.expect_action(UserId(1)).return_ok(UserActionResult::Cleared);

    let (orders, handle) = spawn_orders(&users, &restaurants, PaymentMethod::ALL.to_vec());

    let order_id = orders.checkout(checkout("pix")).await.unwrap();
    let order: Order = orders.get(order_id).await.unwrap().unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.restaurant_id, RestaurantId(1));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.subtotal, Decimal::new(5890, 2));
    assert_eq!(order.delivery_fee, Decimal::new(500, 2));
    assert_eq!(order.total, Decimal::new(6390, 2));
    assert_eq!(order.delivery_address, "Rua A, 10");
    assert_eq!(order.payment_method, PaymentMethod::Pix);

    users.verify();
    restaurants.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cart_changed_during_checkout_creates_no_order() {
    let mut users = MockClient::<User>::new();
    let mut restaurants = MockClient::<Restaurant>::new();

    users.expect_get(UserId(1)).return_ok(Some(customer_with_cart()));
    restaurants.expect_get(RestaurantId(1)).return_ok(Some(restaurant()));
    users
        .expect_action(UserId(1))
        .return_err(FrameworkError::EntityError(Box::new(UserError::CartChanged {
            expected: 3,
            actual: 4,
        })));

    let (orders, handle) = spawn_orders(&users, &restaurants, PaymentMethod::ALL.to_vec());

    let err = orders.checkout(checkout("cash")).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::User(UserError::CartChanged {
            expected: 3,
            actual: 4
        })
    );
    assert!(orders.list().await.unwrap().is_empty());

    users.verify();
    restaurants.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_cart_stops_before_restaurant_lookup() {
    let mut users = MockClient::<User>::new();
    let restaurants = MockClient::<Restaurant>::new();

    users
        .expect_get(UserId(1))
        .return_ok(Some(User::new(UserId(1), "Ana", "ana@example.com")));

    let (orders, handle) = spawn_orders(&users, &restaurants, PaymentMethod::ALL.to_vec());

    assert_eq!(orders.checkout(checkout("pix")).await, Err(OrderError::EmptyCart));

    users.verify();
    restaurants.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_payment_method_checks_do_not_touch_the_cart() {
    let mut users = MockClient::<User>::new();
    let mut restaurants = MockClient::<Restaurant>::new();

    // a known method this marketplace does not take
    users.expect_get(UserId(1)).return_ok(Some(customer_with_cart()));
    restaurants.expect_get(RestaurantId(1)).return_ok(Some(restaurant()));

    let (orders, handle) = spawn_orders(&users, &restaurants, vec![PaymentMethod::Cash]);

    assert_eq!(
        orders.checkout(checkout("credit_card")).await,
        Err(OrderError::InvalidPaymentMethod("credit_card".into()))
    );

    // an unknown name is rejected before any lookup
    assert_eq!(
        orders.checkout(checkout("bitcoin")).await,
        Err(OrderError::InvalidPaymentMethod("bitcoin".into()))
    );

    users.verify();
    restaurants.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_user_is_rejected() {
    let mut users = MockClient::<User>::new();
    let restaurants = MockClient::<Restaurant>::new();

    users.expect_get(UserId(1)).return_ok(None);

    let (orders, handle) = spawn_orders(&users, &restaurants, PaymentMethod::ALL.to_vec());

    assert_eq!(
        orders.checkout(checkout("pix")).await,
        Err(OrderError::InvalidUser(UserId(1)))
    );

    users.verify();
    restaurants.verify();

    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_order_ids_are_only_used_by_successful_checkouts() {
    let mut users = MockClient::<User>::new();
    let mut restaurants = MockClient::<Restaurant>::new();

    users.expect_get(UserId(1)).return_ok(None);
    users.expect_get(UserId(1)).return_ok(Some(customer_with_cart()));
    restaurants.expect_get(RestaurantId(1)).return_ok(Some(restaurant()));
    users.expect_action(UserId(1)).return_ok(UserActionResult::Cleared);

    let (orders, handle) = spawn_orders(&users, &restaurants, PaymentMethod::ALL.to_vec());

    assert!(orders.checkout(checkout("pix")).await.is_err());
    let order_id = orders.checkout(checkout("pix")).await.unwrap();
    assert_eq!(order_id.to_string(), "order_1");

    users.verify();
    restaurants.verify();

    drop(orders);
    handle.await.unwrap();
}

// The raw ResourceActor is what order_actor::new wraps; make sure a bare one
// also serves the generic requests.
#[tokio::test]
async fn test_bare_resource_actor_reports_missing_orders() {
    let users = MockClient::<User>::new();
    let restaurants = MockClient::<Restaurant>::new();
    let (actor, client) = ResourceActor::<Order>::new(4);
    let handle = tokio::spawn(actor.run(OrderContext {
        users: UserClient::new(users.client()),
        restaurants: RestaurantClient::new(restaurants.client()),
        accepted_payments: vec![PaymentMethod::Pix],
    }));

    let orders = OrderClient::new(client);
    assert!(orders.get(food_delivery::model::OrderId(7)).await.unwrap().is_none());
    assert_eq!(
        orders.cancel_order(food_delivery::model::OrderId(7), UserId(1)).await,
        Err(OrderError::NotFound("order_7".into()))
    );

    drop(orders);
    handle.await.unwrap();
}
